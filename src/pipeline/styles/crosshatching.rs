//! Crosshatching: two-pass line grid at 45 degrees and 135 degrees, tone
//! gated (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{d_grid_distance, on_hatch_line};

const ANGLES_DEG: [f32; 2] = [45.0, 135.0];

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let spacing = (16.0 - cfg.stroke as f32 * 1.3).round().max(3.0);
    let tone_thr = 60.0 + cfg.intensity as f32 * 14.0;
    let half_width = 0.4 + cfg.stroke as f32 * 0.05;

    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let tone = px.0[0] as f32;
        if tone >= tone_thr {
            continue;
        }
        let on_first = on_hatch_line(
            d_grid_distance(x as f32, y as f32, ANGLES_DEG[0].to_radians(), spacing),
            half_width,
            spacing,
        );
        let on_second = on_hatch_line(
            d_grid_distance(x as f32, y as f32, ANGLES_DEG[1].to_radians(), spacing),
            half_width,
            spacing,
        );

        // Either line family registers as ink — the 45°/135° pair must
        // both be visible wherever tone gates hatching in at all.
        if on_first || on_second {
            canvas.put_pixel(x, y, Luma([0]));
        }
    }
    canvas
}
