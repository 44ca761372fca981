//! Stippling: dark regions rendered as jittered dot clusters (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;

use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;
use crate::models::StylizeConfig;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));

    let step = (14.0 - 1.1 * cfg.stroke as f32).max(3.0);
    let dot_thr = 90.0 + 11.0 * cfg.intensity as f32;
    let base_r = 0.4 + 0.18 * cfg.stroke as f32;

    let mut gy = 0.0f32;
    while gy < h as f32 {
        let mut gx = 0.0f32;
        while gx < w as f32 {
            let jx = (gx + (rng.random_f32() - 0.5) * step * 0.8).clamp(0.0, (w - 1) as f32);
            let jy = (gy + (rng.random_f32() - 0.5) * step * 0.8).clamp(0.0, (h - 1) as f32);
            let sample = pre.gray.get_pixel(jx as u32, jy as u32).0[0] as f32;
            let darkness = 255.0 - sample;
            if darkness > 255.0 - dot_thr {
                let radius = (base_r * (0.5 + darkness / 255.0)).round().max(1.0) as i32;
                draw_filled_circle_mut(&mut canvas, (jx as i32, jy as i32), radius, Luma([0]));
            }
            gx += step;
        }
        gy += step;
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::preprocess::preprocess;
    use image::{DynamicImage, RgbImage, Rgb};

    #[test]
    fn dark_image_produces_more_ink_than_light_image() {
        let dark = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([10, 10, 10])));
        let light = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([245, 245, 245])));
        let cfg = StylizeConfig::default();
        let pre_dark = preprocess(dark, &cfg);
        let pre_light = preprocess(light, &cfg);

        let mut r1 = Prng::new(42);
        let mut r2 = Prng::new(42);
        let out_dark = render(&pre_dark, &cfg, &mut r1);
        let out_light = render(&pre_light, &cfg, &mut r2);

        let ink_dark: u64 = out_dark.pixels().map(|p| (255 - p.0[0]) as u64).sum();
        let ink_light: u64 = out_light.pixels().map(|p| (255 - p.0[0]) as u64).sum();
        assert!(ink_dark >= ink_light);
    }
}
