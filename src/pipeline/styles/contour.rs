//! Contour: smoothstep-gated lines only, on a blank field — like
//! `minimalist` but with a softer, wider band suited to continuous
//! contour study (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 40.0 + 13.0 * (11.0 - cfg.intensity as f32) - 2.5 * cfg.stroke as f32;
    let band = 6.0 + 2.0 * cfg.stroke as f32;

    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        if line > 0.0 {
            canvas.put_pixel(x, y, Luma([(255.0 * (1.0 - line)) as u8]));
        }
    }
    canvas
}
