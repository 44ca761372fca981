//! Final Gaussian smoothing pass (spec §4.4). A `smoothing` of `0`
//! leaves the buffer untouched.

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Kernel-size-derived sigma, matching the reference's
/// `kernel_size = max(3, int(smoothing*2) | 1)` odd-kernel convention —
/// `imageproc`'s Gaussian takes sigma directly, so the forced-odd kernel
/// size is converted to an equivalent sigma.
pub fn apply(img: &GrayImage, smoothing: u32) -> GrayImage {
    if smoothing == 0 {
        return img.clone();
    }
    let kernel_size = (smoothing * 2).max(3) | 1;
    let sigma = kernel_size as f32 / 6.0;
    gaussian_blur_f32(img, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn zero_smoothing_is_identity() {
        let img = GrayImage::from_fn(5, 5, |x, y| Luma([(x * 10 + y) as u8]));
        let out = apply(&img, 0);
        assert_eq!(out, img);
    }

    #[test]
    fn smoothing_reduces_local_variance() {
        let img = GrayImage::from_fn(20, 20, |x, _| Luma([if x % 2 == 0 { 0 } else { 255 }]));
        let out = apply(&img, 5);
        let variance = |buf: &GrayImage| {
            let values: Vec<f64> = buf.pixels().map(|p| p.0[0] as f64).collect();
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
        };
        assert!(variance(&out) < variance(&img));
    }
}
