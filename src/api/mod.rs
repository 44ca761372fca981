//! HTTP handlers (spec §2.1 ambient transport). Thin wrappers around the
//! library pipeline — no stylization logic lives here.

mod health;
mod style_transfer;
mod styles;

pub use health::health;
pub use style_transfer::style_transfer_advanced;
pub use styles::list_styles;
