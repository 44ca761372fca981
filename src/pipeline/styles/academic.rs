//! Academic: classical tonal figure-drawing rendering — full S-curve
//! value range with soft, wide edge bands rather than hard lines
//! (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{d_grid_distance, ink_scale, on_hatch_line, s_curve, smoothstep_band};

const HATCH_ANGLE_DEG: f32 = 45.0;
const HATCH_GRAY_THR: f32 = 80.0;
const HATCH_INK: f32 = 30.0;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 55.0 - 3.0 * cfg.intensity as f32;
    let band = 14.0 + cfg.stroke as f32 * 2.0;
    let spacing = (16.0 - cfg.stroke as f32 * 1.3).round().max(3.0);
    let half_width = 0.4 + cfg.stroke as f32 * 0.05;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let t = px.0[0] as f32 / 255.0;
        let base = 15.0 + s_curve(t) * 225.0;
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        let mut tone = base * (1.0 - line * 0.6);

        if px.0[0] as f32 < HATCH_GRAY_THR {
            let d = d_grid_distance(x as f32, y as f32, HATCH_ANGLE_DEG.to_radians(), spacing);
            if on_hatch_line(d, half_width, spacing) {
                tone *= ink_scale(1.0, HATCH_INK);
            }
        }
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }
    canvas
}
