//! Etching: cumulative four-angle hatching — each tonal band adds one
//! more hatch direction, so the darkest regions carry all four layers
//! (spec §4.2; the reference implementation's simpler single-angle grid
//! is superseded by the documented table here).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{d_grid_distance, on_hatch_line, smoothstep_band};

const ANGLES_DEG: [f32; 4] = [0.0, 45.0, 90.0, 135.0];
const TONE_BANDS: [f32; 4] = [200.0, 150.0, 100.0, 50.0];

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let spacing = (5.0 - 0.2 * cfg.stroke as f32).max(2.0);
    let half_width = 0.4 + cfg.stroke as f32 * 0.05;
    let edge_thr = 40.0 + 13.0 * (11.0 - cfg.intensity as f32) - 2.5 * cfg.stroke as f32;
    let edge_band = 6.0 + 2.0 * cfg.stroke as f32;

    // Base: smoothstep edge outlines over white, as the spec's variant
    // table documents for this kernel.
    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));
    for (x, y, _) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, edge_thr, edge_band);
        if line > 0.0 {
            canvas.put_pixel(x, y, Luma([(255.0 * (1.0 - line)) as u8]));
        }
    }

    for (x, y, px) in pre.gray.enumerate_pixels() {
        let tone = px.0[0] as f32;
        let mut layers = 0;
        for (band, _) in TONE_BANDS.iter().zip(ANGLES_DEG.iter()) {
            if tone < *band {
                layers += 1;
            }
        }
        if layers == 0 {
            continue;
        }
        let mut on_any_line = false;
        for angle in ANGLES_DEG.iter().take(layers) {
            let d = d_grid_distance(x as f32, y as f32, angle.to_radians(), spacing);
            if on_hatch_line(d, half_width, spacing) {
                on_any_line = true;
                break;
            }
        }
        if on_any_line {
            canvas.put_pixel(x, y, Luma([0]));
        }
    }
    canvas
}
