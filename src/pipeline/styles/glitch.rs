//! Glitch: a clean edge line-drawing corrupted by row-shift artifacts and
//! dropout bars (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::smoothstep_band;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 50.0 - 3.0 * cfg.intensity as f32;
    let band = 10.0;

    let mut canvas = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let line = smoothstep_band(pre.edges.get_pixel(x, y).0[0] as f32, thr, band);
        let tone = px.0[0] as f32 * (1.0 - line);
        canvas.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }

    let mut shifted = canvas.clone();
    let num_corrupt_rows = (h / 20).max(1) + cfg.intensity;
    for _ in 0..num_corrupt_rows {
        let y = rng.randint(0, h as i32 - 1) as u32;
        let shift = rng.randint(-20, 20);
        for x in 0..w as i32 {
            let src_x = (x + shift).clamp(0, w as i32 - 1) as u32;
            shifted.put_pixel(x as u32, y, *canvas.get_pixel(src_x, y));
        }
    }

    let num_dropout_bars = cfg.intensity / 2;
    for _ in 0..num_dropout_bars {
        let y = rng.randint(0, h as i32 - 1) as u32;
        let height = rng.randint(1, 4) as u32;
        for dy in 0..height {
            let yy = (y + dy).min(h - 1);
            for x in 0..w {
                shifted.put_pixel(x, yy, Luma([255]));
            }
        }
    }

    shifted
}
