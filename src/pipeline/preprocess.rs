//! Decode & resize, edge-preserving smoothing, grayscale, and the shared
//! Sobel edge map (spec §4.1).

use image::{imageops::FilterType, DynamicImage, GrayImage, Rgb, RgbImage};

use crate::models::StylizeConfig;

/// Longer-side cap applied when the caller did not request an explicit
/// resolution/aspect (spec §2 stage 1, §4.1).
pub const MAX_DIMENSION: u32 = 1200;

const BILATERAL_SPATIAL_SIGMA: f32 = 9.0;
const BILATERAL_RANGE_SIGMA: f32 = 75.0;
/// OpenCV's `bilateralFilter(d=9, ...)` uses a fixed 9x9 neighborhood
/// (radius 4) regardless of the sigma values (spec §4.1).
const BILATERAL_RADIUS: i32 = 4;

/// Preprocessed working buffers handed to every style kernel.
pub struct Preprocessed {
    /// Bilateral-smoothed color image; reused verbatim by colorization
    /// (spec §4.6).
    pub color: RgbImage,
    pub gray: GrayImage,
    pub edges: GrayImage,
}

/// Resize the decoded input per spec §4.1: exact target if `resolution` +
/// `aspect` were supplied, else an isotropic cap at [`MAX_DIMENSION`].
pub fn resize_input(img: DynamicImage, cfg: &StylizeConfig) -> RgbImage {
    if let (Some(resolution), Some((aw, ah))) = (cfg.resolution, cfg.aspect) {
        let target_w = resolution.max(1);
        let target_h = ((resolution as u64 * ah as u64) / aw.max(1) as u64).max(1) as u32;
        return img
            .resize_exact(target_w, target_h, FilterType::Lanczos3)
            .to_rgb8();
    }

    let (w, h) = (img.width(), img.height());
    if w.max(h) > MAX_DIMENSION {
        let scale = MAX_DIMENSION as f32 / w.max(h) as f32;
        let new_w = ((w as f32 * scale).round() as u32).max(1);
        let new_h = ((h as f32 * scale).round() as u32).max(1);
        img.resize_exact(new_w, new_h, FilterType::Triangle).to_rgb8()
    } else {
        img.to_rgb8()
    }
}

/// Edge-preserving bilateral smoothing, spatial sigma 9 / range sigma 75
/// (spec §4.1). Hand-rolled since it must match the canonical kernel
/// shape exactly (spec §9).
pub fn bilateral_filter(src: &RgbImage) -> RgbImage {
    let (w, h) = src.dimensions();
    let mut out = RgbImage::new(w, h);

    let spatial_weights = precompute_spatial_weights(BILATERAL_RADIUS, BILATERAL_SPATIAL_SIGMA);

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let center = src.get_pixel(x as u32, y as u32).0;
            let mut sum = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for dy in -BILATERAL_RADIUS..=BILATERAL_RADIUS {
                let ny = y + dy;
                if ny < 0 || ny >= h as i32 {
                    continue;
                }
                for dx in -BILATERAL_RADIUS..=BILATERAL_RADIUS {
                    let nx = x + dx;
                    if nx < 0 || nx >= w as i32 {
                        continue;
                    }
                    let sample = src.get_pixel(nx as u32, ny as u32).0;
                    let range_dist_sq = (0..3)
                        .map(|c| {
                            let d = sample[c] as f32 - center[c] as f32;
                            d * d
                        })
                        .sum::<f32>();
                    let range_weight =
                        (-range_dist_sq / (2.0 * BILATERAL_RANGE_SIGMA * BILATERAL_RANGE_SIGMA))
                            .exp();
                    let spatial_weight =
                        spatial_weights[(dy + BILATERAL_RADIUS) as usize][(dx + BILATERAL_RADIUS) as usize];
                    let weight = spatial_weight * range_weight;
                    weight_sum += weight;
                    for c in 0..3 {
                        sum[c] += weight * sample[c] as f32;
                    }
                }
            }

            let px = if weight_sum > 0.0 {
                [
                    (sum[0] / weight_sum).round().clamp(0.0, 255.0) as u8,
                    (sum[1] / weight_sum).round().clamp(0.0, 255.0) as u8,
                    (sum[2] / weight_sum).round().clamp(0.0, 255.0) as u8,
                ]
            } else {
                center
            };
            out.put_pixel(x as u32, y as u32, Rgb(px));
        }
    }

    out
}

fn precompute_spatial_weights(radius: i32, sigma: f32) -> Vec<Vec<f32>> {
    let size = (radius * 2 + 1) as usize;
    let mut weights = vec![vec![0.0f32; size]; size];
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = (dx * dx + dy * dy) as f32;
            let w = (-dist_sq / (2.0 * sigma * sigma)).exp();
            weights[(dy + radius) as usize][(dx + radius) as usize] = w;
        }
    }
    weights
}

/// Standard luma grayscale conversion (BT.601, matching OpenCV's
/// `COLOR_BGR2GRAY`): `Y = 0.299 R + 0.587 G + 0.114 B`.
pub fn to_grayscale(src: &RgbImage) -> GrayImage {
    let (w, h) = src.dimensions();
    let mut out = GrayImage::new(w, h);
    for (x, y, px) in src.enumerate_pixels() {
        let [r, g, b] = px.0;
        let y_val =
            0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        out.put_pixel(x, y, image::Luma([y_val.round().clamp(0.0, 255.0) as u8]));
    }
    out
}

/// 3x3 Sobel gradient magnitude, scaled by `intensity/6` and clamped to
/// 8-bit (spec §3 "EdgeMap", §4.1).
pub fn sobel_edges(gray: &GrayImage, intensity: u32) -> GrayImage {
    let (w, h) = gray.dimensions();
    let mut out = GrayImage::new(w, h);
    let scale = intensity as f32 / 6.0;

    let sample = |x: i32, y: i32| -> f32 {
        let cx = x.clamp(0, w as i32 - 1) as u32;
        let cy = y.clamp(0, h as i32 - 1) as u32;
        gray.get_pixel(cx, cy).0[0] as f32
    };

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let gx = -sample(x - 1, y - 1) - 2.0 * sample(x - 1, y) - sample(x - 1, y + 1)
                + sample(x + 1, y - 1)
                + 2.0 * sample(x + 1, y)
                + sample(x + 1, y + 1);
            let gy = -sample(x - 1, y - 1) - 2.0 * sample(x, y - 1) - sample(x + 1, y - 1)
                + sample(x - 1, y + 1)
                + 2.0 * sample(x, y + 1)
                + sample(x + 1, y + 1);
            let mag = (gx * gx + gy * gy).sqrt() * scale;
            out.put_pixel(x as u32, y as u32, image::Luma([mag.clamp(0.0, 255.0) as u8]));
        }
    }

    out
}

/// Run the full preprocessing chain (spec §4.1 contract).
pub fn preprocess(img: DynamicImage, cfg: &StylizeConfig) -> Preprocessed {
    let resized = resize_input(img, cfg);
    let color = bilateral_filter(&resized);
    let gray = to_grayscale(&color);
    let edges = sobel_edges(&gray, cfg.intensity);
    Preprocessed { color, gray, edges }
}
