//! Comic: bold per-pixel edge-weighted outlines, flat spot-blacks in deep
//! shadow, and a scattering of speed lines (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let edge_thr = 60.0 - 3.0 * cfg.intensity as f32;
    let spot_thr = 40u8;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let base = px.0[0];
        let edge = pre.edges.get_pixel(x, y).0[0] as f32;
        let line_weight = ((edge - edge_thr) / 40.0).clamp(0.0, 1.0);
        let mut tone = base as f32 * (1.0 - line_weight);
        if base < spot_thr {
            tone = 0.0;
        }
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }

    let speed_lines = 4 + cfg.intensity / 2;
    for _ in 0..speed_lines {
        let y0 = rng.randint(0, h as i32 - 1) as f32;
        let x0 = rng.randint(0, w as i32 / 4) as f32;
        let length = w as f32 * (0.2 + rng.random_f32() * 0.3);
        let x1 = (x0 + length).min((w - 1) as f32);
        draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y0), Luma([30]));
    }

    canvas
}
