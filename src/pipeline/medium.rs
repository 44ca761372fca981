//! Medium effect: per-drawing-medium dilation + additive tone shift
//! (spec §4.3). Unknown mediums fall back to the pencil profile at the
//! model layer (`ArtStyle::parse`), so this table is total.

use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology::dilate;

use crate::models::ArtStyle;

struct MediumProfile {
    dilate_iterations: u8,
    tone_delta: i32,
}

fn profile(art_style: ArtStyle) -> MediumProfile {
    match art_style {
        ArtStyle::Pencil => MediumProfile { dilate_iterations: 0, tone_delta: 15 },
        ArtStyle::Ink => MediumProfile { dilate_iterations: 1, tone_delta: -10 },
        ArtStyle::Marker => MediumProfile { dilate_iterations: 1, tone_delta: -20 },
        ArtStyle::Pen => MediumProfile { dilate_iterations: 2, tone_delta: -30 },
        ArtStyle::Pastel => MediumProfile { dilate_iterations: 3, tone_delta: -35 },
    }
}

/// Apply the medium's structuring-element dilation (3x3 elliptical,
/// approximated by `imageproc`'s `Norm::LInf` ball) followed by an
/// additive, clipped tone shift.
pub fn apply(img: &GrayImage, art_style: ArtStyle) -> GrayImage {
    let profile = profile(art_style);

    let mut dilated = img.clone();
    for _ in 0..profile.dilate_iterations {
        // Dilation on an "ink-is-dark" buffer means growing dark strokes,
        // i.e. eroding the bright background: invert, dilate, invert back.
        let inverted = invert(&dilated);
        let grown = dilate(&inverted, Norm::LInf, 1);
        dilated = invert(&grown);
    }

    let mut out = GrayImage::new(dilated.width(), dilated.height());
    for (x, y, px) in dilated.enumerate_pixels() {
        let v = px.0[0] as i32 + profile.tone_delta;
        out.put_pixel(x, y, Luma([v.clamp(0, 255) as u8]));
    }
    out
}

fn invert(img: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        px.0[0] = 255 - px.0[0];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pencil_is_lightest_and_undilated() {
        let img = GrayImage::from_fn(10, 10, |x, _| Luma([if x == 5 { 0 } else { 255 }]));
        let out = apply(&img, ArtStyle::Pencil);
        assert_eq!(out.get_pixel(0, 0).0[0], 255);
        assert_eq!(out.get_pixel(5, 0).0[0], 15);
    }

    #[test]
    fn pen_darkens_and_thickens_strokes() {
        let img = GrayImage::from_fn(10, 10, |x, _| Luma([if x == 5 { 0 } else { 255 }]));
        let out = apply(&img, ArtStyle::Pen);
        assert_eq!(out.get_pixel(4, 0).0[0], 0);
        assert_eq!(out.get_pixel(5, 0).0[0], 0);
        assert_eq!(out.get_pixel(6, 0).0[0], 0);
    }
}
