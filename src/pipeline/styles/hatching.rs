//! Hatching: single-angle modular-distance-field hatching gated by tone,
//! with a hysteresis band to avoid flickering at the threshold
//! (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{d_grid_distance, ink_scale, on_hatch_line, smoothstep_band};

const ANGLE_DEG: f32 = 30.0;
const HATCH_INK: f32 = 30.0;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let spacing = (16.0 - cfg.stroke as f32 * 1.3).round().max(3.0);
    let tone_thr = 60.0 + cfg.intensity as f32 * 14.0;
    let hysteresis = 6.0;
    let half_width = 0.4 + cfg.stroke as f32 * 0.05;
    let edge_thr = 40.0 + 13.0 * (11.0 - cfg.intensity as f32) - 2.5 * cfg.stroke as f32;
    let edge_band = 6.0 + 2.0 * cfg.stroke as f32;

    // Base: an edge outline over white, the same shared idiom `contour`
    // and `architectural` use (spec §4.2 "Base = edge outline + white").
    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, edge_thr, edge_band);
        if line > 0.0 {
            canvas.put_pixel(x, y, Luma([(255.0 * (1.0 - line)) as u8]));
        }
    }

    // Hatch overlay, darkening multiplicatively toward the ink tone
    // rather than overwriting to flat black.
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let tone = px.0[0] as f32;
        if tone < tone_thr + hysteresis {
            let d = d_grid_distance(x as f32, y as f32, ANGLE_DEG.to_radians(), spacing);
            if on_hatch_line(d, half_width, spacing) {
                let current = canvas.get_pixel(x, y).0[0] as f32;
                let scale = ink_scale(1.0, HATCH_INK);
                canvas.put_pixel(x, y, Luma([(current * scale).clamp(0.0, 255.0) as u8]));
            }
        }
    }

    canvas
}
