//! Cartoon: four-level tonal posterization with a dilated outline
//! (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::morphology::dilate;
use imageproc::distance_transform::Norm;

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;

const LEVELS: u8 = 4;
const LEVEL_TONES: [u8; LEVELS as usize] = [22, 90, 185, 245];

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let thr = 60.0 - 3.0 * cfg.intensity as f32;

    let mut posterized = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let level = (px.0[0] as u32 * (LEVELS as u32 - 1) + 127) / 255;
        posterized.put_pixel(x, y, Luma([LEVEL_TONES[level as usize]]));
    }

    let mut outline = GrayImage::new(w, h);
    for (x, y, px) in pre.edges.enumerate_pixels() {
        outline.put_pixel(x, y, Luma([if px.0[0] as f32 > thr { 255 } else { 0 }]));
    }

    let radius = (0.28 * cfg.stroke as f32 - 0.1).round();
    let mut canvas = posterized;
    if radius > 0.0 {
        let dilated = dilate(&outline, Norm::LInf, radius as u8);
        for (x, y, px) in dilated.enumerate_pixels() {
            if px.0[0] > 0 {
                canvas.put_pixel(x, y, Luma([0]));
            }
        }
    } else {
        for (x, y, px) in outline.enumerate_pixels() {
            if px.0[0] > 0 {
                canvas.put_pixel(x, y, Luma([0]));
            }
        }
    }
    canvas
}
