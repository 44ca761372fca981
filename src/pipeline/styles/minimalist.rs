//! Minimalist: the sparsest kernel — thin smoothstep-gated lines on a
//! blank field, no tonal shading at all (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = (160.0 - 14.0 * cfg.intensity as f32).max(20.0);
    let band = 2.0 + cfg.stroke as f32 * 0.3;

    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        if line > 0.0 {
            canvas.put_pixel(x, y, Luma([(255.0 * (1.0 - line)) as u8]));
        }
    }
    canvas
}
