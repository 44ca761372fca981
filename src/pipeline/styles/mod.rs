//! The style kernel catalogue (spec §4.2). One module per kernel; each
//! exposes a `render` function with the common signature
//! `(&Preprocessed, &StylizeConfig, &mut Prng) -> GrayImage`.

pub mod academic;
pub mod architectural;
pub mod blindcontour;
pub mod cartoon;
pub mod charcoal;
pub mod comic;
pub mod contour;
pub mod crosshatching;
pub mod drybrush;
pub mod etching;
pub mod fashion;
pub mod gesture;
pub mod glitch;
pub mod hatching;
pub mod inkwash;
pub mod minimalist;
pub mod mixedmedia;
pub mod stippling;
pub mod tonalpencil;
pub mod urban;
