mod request;

pub use request::{ArtStyle, BrushTag, StyleTag, StylizeConfig};
