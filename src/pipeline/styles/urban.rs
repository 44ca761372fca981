//! Urban sketch: confident, slightly heavier contour lines over a muted
//! tonal base, tuned for architecture-in-context scenes (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::{s_curve, smoothstep_band};

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 50.0 - 3.0 * cfg.intensity as f32;
    let band = 8.0 + cfg.stroke as f32 * 1.2;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let t = px.0[0] as f32 / 255.0;
        let base = 40.0 + s_curve(t) * 195.0;
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        let tone = base * (1.0 - line);
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }
    canvas
}
