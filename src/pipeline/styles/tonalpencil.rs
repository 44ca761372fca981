//! Tonal pencil: pure S-curve tonal shading, no hatching or line work at
//! all — the smoothest kernel in the catalogue (spec §4.2, "tonal
//! shading").

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::s_curve;

pub fn render(pre: &Preprocessed, _cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let t = px.0[0] as f32 / 255.0;
        let tone = 255.0 * s_curve(t);
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }
    canvas
}
