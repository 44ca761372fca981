//! Color stage (spec §4.6): colorize blend, contrast, saturation/hue,
//! and invert, applied in that order to match the reference pipeline's
//! `addWeighted` -> `apply_color_adjustments` -> `bitwise_not` sequence.

use image::{Rgb, RgbImage};

use crate::models::StylizeConfig;

/// Blend the grayscale stylization result with the bilaterally-smoothed
/// color source 50/50 when `colorize` is set; otherwise replicate the
/// gray value across all three channels (spec §4.6, §8 "Colorize bound").
pub fn colorize_blend(gray: &image::GrayImage, color: &RgbImage, colorize: bool) -> RgbImage {
    let (w, h) = gray.dimensions();
    let mut out = RgbImage::new(w, h);
    for (x, y, gp) in gray.enumerate_pixels() {
        let g = gp.0[0] as f32;
        if colorize {
            let c = color.get_pixel(x, y).0;
            let blended = [
                ((g + c[0] as f32) / 2.0).round().clamp(0.0, 255.0) as u8,
                ((g + c[1] as f32) / 2.0).round().clamp(0.0, 255.0) as u8,
                ((g + c[2] as f32) / 2.0).round().clamp(0.0, 255.0) as u8,
            ];
            out.put_pixel(x, y, Rgb(blended));
        } else {
            out.put_pixel(x, y, Rgb([gp.0[0]; 3]));
        }
    }
    out
}

/// Multiplicative contrast: `v' = v * factor`, where `factor = 1 +
/// contrast/100` (spec §4.6).
pub fn apply_contrast(img: &mut RgbImage, contrast: i32) {
    if contrast == 0 {
        return;
    }
    let factor = 1.0 + contrast as f32 / 100.0;
    for px in img.pixels_mut() {
        for c in px.0.iter_mut() {
            let v = *c as f32 * factor;
            *c = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Saturation/hue adjustment via HSV, hue expressed in OpenCV's 0..179
/// convention (spec §9 design note: implementers using the 0..359
/// convention must halve their hue-shift input before calling this).
pub fn apply_saturation_hue(img: &mut RgbImage, saturation: i32, hue_shift: i32) {
    if saturation == 0 && hue_shift == 0 {
        return;
    }
    let sat_factor = 1.0 + saturation as f32 / 100.0;
    for px in img.pixels_mut() {
        let (h, s, v) = rgb_to_hsv_opencv(px.0);
        let new_h = ((h as i32 + hue_shift).rem_euclid(180)) as u8;
        let new_s = (s as f32 * sat_factor).round().clamp(0.0, 255.0) as u8;
        px.0 = hsv_to_rgb_opencv(new_h, new_s, v);
    }
}

pub fn apply_invert(img: &mut RgbImage) {
    for px in img.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = 255 - *c;
        }
    }
}

/// RGB -> HSV with hue scaled to OpenCV's `[0, 179]` range rather than
/// the usual `[0, 359]`.
fn rgb_to_hsv_opencv(rgb: [u8; 3]) -> (u8, u8, u8) {
    let (r, g, b) = (rgb[0] as f32, rgb[1] as f32, rgb[2] as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let h = (hue_deg / 2.0).round().clamp(0.0, 179.0) as u8;
    let s = if max == 0.0 { 0 } else { ((delta / max) * 255.0).round() as u8 };
    let v = max.round() as u8;
    (h, s, v)
}

fn hsv_to_rgb_opencv(h: u8, s: u8, v: u8) -> [u8; 3] {
    let hue_deg = h as f32 * 2.0;
    let s = s as f32 / 255.0;
    let v = v as f32;

    let c = v * s;
    let x = c * (1.0 - ((hue_deg / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match (hue_deg / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        (r1 + m).round().clamp(0.0, 255.0) as u8,
        (g1 + m).round().clamp(0.0, 255.0) as u8,
        (b1 + m).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Run the full color stage (spec §4.6 contract).
pub fn apply(gray: &image::GrayImage, color: &RgbImage, cfg: &StylizeConfig) -> RgbImage {
    let mut out = colorize_blend(gray, color, cfg.colorize);
    apply_contrast(&mut out, cfg.contrast);
    apply_saturation_hue(&mut out, cfg.saturation, cfg.hue_shift);
    if cfg.invert {
        apply_invert(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn colorize_off_replicates_gray_channel() {
        let gray = GrayImage::from_pixel(4, 4, Luma([77]));
        let color = RgbImage::from_pixel(4, 4, Rgb([10, 200, 30]));
        let out = colorize_blend(&gray, &color, false);
        assert_eq!(out.get_pixel(0, 0).0, [77, 77, 77]);
    }

    #[test]
    fn colorize_on_is_bounded_by_average_plus_rounding() {
        let gray = GrayImage::from_pixel(1, 1, Luma([100]));
        let color = RgbImage::from_pixel(1, 1, Rgb([50, 150, 200]));
        let out = colorize_blend(&gray, &color, true);
        let px = out.get_pixel(0, 0).0;
        assert!((px[0] as i32 - 75).abs() <= 1);
        assert!((px[1] as i32 - 125).abs() <= 1);
        assert!((px[2] as i32 - 150).abs() <= 1);
    }

    #[test]
    fn invert_is_involutive() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let original = img.clone();
        apply_invert(&mut img);
        apply_invert(&mut img);
        assert_eq!(img, original);
    }

    #[test]
    fn zero_contrast_and_saturation_are_no_ops() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let original = img.clone();
        apply_contrast(&mut img, 0);
        apply_saturation_hue(&mut img, 0, 0);
        assert_eq!(img, original);
    }
}
