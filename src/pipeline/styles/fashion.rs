//! Fashion croquis: warm paper base tone, a shadow-depth wash, smoothstep
//! contour lines, and vertical drape marks (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

const PAPER_TONE: f32 = 235.0;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 45.0 - 2.0 * cfg.intensity as f32;
    let band = 6.0 + cfg.stroke as f32;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let shadow_depth = (255.0 - px.0[0] as f32) / 255.0;
        let base = PAPER_TONE - shadow_depth * 90.0;
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        let tone = base * (1.0 - line * 0.9);
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }

    let drapes = 5 + cfg.stroke;
    let spacing = w as f32 / drapes as f32;
    for i in 0..drapes {
        let x = spacing * i as f32 + spacing * 0.5 + (rng.random_f32() - 0.5) * spacing * 0.3;
        let y0 = 0.0;
        let y1 = (h - 1) as f32;
        if rng.chance(0.7) {
            draw_line_segment_mut(&mut canvas, (x, y0), (x + rng.random_f32() * 6.0 - 3.0, y1), Luma([190]));
        }
    }

    canvas
}
