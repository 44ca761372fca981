//! Mixed media: a quadratic tonal base, smoothstep pen lines, stippled
//! dots through the midtones, and two-angle crosshatch in the shadows
//! (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{d_grid_distance, on_hatch_line, smoothstep_band};

const ANGLES_DEG: [f32; 2] = [36.0, 72.0];

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 50.0 - 3.0 * cfg.intensity as f32;
    let band = 8.0;
    let spacing = (14.0 - cfg.stroke as f32).max(3.0);
    let half_width = 0.4 + cfg.stroke as f32 * 0.05;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let t = px.0[0] as f32 / 255.0;
        let mut tone = t * t * 255.0;

        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        tone *= 1.0 - line;

        let gray = px.0[0];
        if gray >= 80 && gray <= 178 && rng.chance(0.15) {
            tone *= 0.4;
        }

        if gray < 80 {
            for angle in ANGLES_DEG.iter() {
                let d = d_grid_distance(x as f32, y as f32, angle.to_radians(), spacing);
                if on_hatch_line(d, half_width, spacing) {
                    tone *= 0.5;
                }
            }
        }

        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }
    canvas
}
