//! Dry brush: scratchy, broken strokes over a high-contrast tonal base
//! (spec §4.2). Grounded on the same edge-banding idiom as `minimalist`
//! and `contour` but with a noise-speckled, partially-opaque stroke.

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = (130.0 - 9.0 * cfg.intensity as f32).max(10.0);
    let band = 10.0 + cfg.stroke as f32 * 2.0;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let base = px.0[0] as f32;
        let edge = pre.edges.get_pixel(x, y).0[0] as f32;
        let line = smoothstep_band(edge, thr, band);

        // Broken, "dry" bristle gaps: a fraction of ink-bearing pixels are
        // skipped entirely, scaled by how hard the brush is pressed.
        let keep = rng.chance(0.55 + 0.04 * cfg.stroke as f64);
        let darkened = if line > 0.0 && keep {
            base * (1.0 - line * 0.85)
        } else {
            base
        };
        canvas.put_pixel(x, y, Luma([darkened.clamp(0.0, 255.0) as u8]));
    }

    canvas
}
