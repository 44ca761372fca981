//! Architectural: crisp, thin, high-threshold lines with minimal tonal
//! shading — drafting-pen rendering of structure (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 52.0 + 14.0 * (11.0 - cfg.intensity as f32) - 3.0 * cfg.stroke as f32;
    let band = 3.0 + cfg.stroke as f32 * 0.5;

    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        if line > 0.0 {
            let tone = 255.0 * (1.0 - line);
            canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
        }
    }
    canvas
}
