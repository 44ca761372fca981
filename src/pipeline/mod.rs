//! The stylization pipeline (spec §2): decode/resize -> preprocess ->
//! style kernel -> medium effect -> smoothing -> brush overlay -> color
//! stage -> PNG encode.

pub mod brush;
pub mod color;
pub mod dispatch;
pub mod medium;
pub mod preprocess;
pub mod prng;
pub mod shared;
mod smoothing;
pub mod styles;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::PipelineError;
use crate::models::StylizeConfig;

/// Run the full pipeline on a decoded input image and encode the result
/// as PNG bytes (spec §2, §5 "Encode").
pub fn stylize(img: DynamicImage, cfg: &StylizeConfig) -> Result<Vec<u8>, PipelineError> {
    let pre = preprocess::preprocess(img, cfg);

    let mut rng = prng::Prng::new(cfg.seed);
    let styled = dispatch::dispatch(&pre, cfg, &mut rng);

    let with_medium = medium::apply(&styled, cfg.art_style);
    let smoothed = smoothing::apply(&with_medium, cfg.smoothing);
    let brushed = brush::apply(&smoothed, cfg.brush, cfg, &mut rng);

    let colored = color::apply(&brushed, &pre.color, cfg);

    encode_png(&colored)
}

/// Decode raw bytes into an in-memory image (spec §2 "Decode", §7
/// `DecodeError`).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PipelineError> {
    image::load_from_memory(bytes).map_err(|e| PipelineError::Decode(e.to_string()))
}

fn encode_png(img: &image::RgbImage) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| PipelineError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

pub use smoothing::apply as smooth;

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
            Rgb([((x * 3) % 255) as u8, ((y * 5) % 255) as u8, 128])
        }))
    }

    #[test]
    fn stylize_produces_valid_png_bytes() {
        let cfg = StylizeConfig::default();
        let bytes = stylize(solid(32, 32), &cfg).expect("stylize should succeed");
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn stylize_is_deterministic_for_fixed_seed() {
        let mut cfg = StylizeConfig::default();
        cfg.style = crate::models::StyleTag::Stippling;
        cfg.seed = 42;
        let a = stylize(solid(32, 32), &cfg).unwrap();
        let b = stylize(solid(32, 32), &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_dimensions_match_preprocessed_input() {
        let cfg = StylizeConfig::default();
        let img = solid(64, 48);
        let bytes = stylize(img, &cfg).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn one_by_one_pixel_input_does_not_panic() {
        let cfg = StylizeConfig::default();
        let img = solid(1, 1);
        let bytes = stylize(img, &cfg).unwrap();
        assert!(!bytes.is_empty());
    }
}
