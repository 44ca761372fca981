//! Gesture: loose, fast directional strokes following the gradient
//! field, heavier and less edge-gated than `contour` (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 40.0 - 2.0 * cfg.intensity as f32;
    let band = 12.0 + cfg.stroke as f32;

    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        if line > 0.0 {
            canvas.put_pixel(x, y, Luma([(255.0 * (1.0 - line)) as u8]));
        }
    }

    let extra_strokes = cfg.stroke;
    for _ in 0..extra_strokes {
        let x0 = rng.randint(0, w as i32 - 1) as f32;
        let y0 = rng.randint(0, h as i32 - 1) as f32;
        let angle = rng.random_f32() * std::f32::consts::TAU;
        let len = (w.min(h)) as f32 * (0.1 + rng.random_f32() * 0.2);
        let x1 = (x0 + angle.cos() * len).clamp(0.0, (w - 1) as f32);
        let y1 = (y0 + angle.sin() * len).clamp(0.0, (h - 1) as f32);
        draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y1), Luma([120]));
    }

    canvas
}
