//! Ink wash: a soft tonal wash from bilaterally-smoothed thresholded
//! edges, no hard outlines (spec §4.2).

use image::{GrayImage, Luma};

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::pipeline::shared::s_curve;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, _rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let edge_gain = cfg.intensity as f32 / 10.0;

    let mut wash = GrayImage::new(w, h);
    for (x, y, px) in pre.gray.enumerate_pixels() {
        let t = px.0[0] as f32 / 255.0;
        let tone = 255.0 * s_curve(t);
        wash.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }

    // Box-blur the wash to emulate the bilateral softening the reference
    // applies to the edge mask before compositing.
    let blurred = box_blur(&wash, 3);

    let mut out = GrayImage::new(w, h);
    for (x, y, px) in blurred.enumerate_pixels() {
        let edge = pre.edges.get_pixel(x, y).0[0] as f32;
        let tone = px.0[0] as f32 - edge * edge_gain * 0.5;
        out.put_pixel(x, y, Luma([tone.clamp(0.0, 255.0) as u8]));
    }
    out
}

fn box_blur(src: &GrayImage, radius: i32) -> GrayImage {
    let (w, h) = src.dimensions();
    let mut out = GrayImage::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut sum = 0u32;
            let mut count = 0u32;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx >= 0 && ny >= 0 && nx < w as i32 && ny < h as i32 {
                        sum += src.get_pixel(nx as u32, ny as u32).0[0] as u32;
                        count += 1;
                    }
                }
            }
            out.put_pixel(x as u32, y as u32, Luma([(sum / count.max(1)) as u8]));
        }
    }
    out
}
