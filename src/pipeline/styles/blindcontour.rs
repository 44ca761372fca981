//! Blind contour: a small number of long, wandering single strokes that
//! drift toward nearby edges and reflect off the canvas boundary,
//! approximating the unbroken-line gesture of blind contour drawing
//! (spec §4.2).

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::StylizeConfig;
use crate::pipeline::prng::Prng;
use crate::pipeline::preprocess::Preprocessed;

const FAN_COUNT: i32 = 12;
const FAN_SPREAD: f32 = std::f32::consts::PI * 0.44;

pub fn render(pre: &Preprocessed, cfg: &StylizeConfig, rng: &mut Prng) -> GrayImage {
    let (w, h) = pre.gray.dimensions();
    let mut canvas = GrayImage::from_pixel(w, h, Luma([255]));

    let step_len = (1.5f32).max((w + h) as f32 / 600.0);
    let num_strokes = 2 + (cfg.intensity as f32 * 0.2).round() as i32;
    let edge_sensitivity = 8.0 + cfg.intensity as f32 * 2.5;

    for _ in 0..num_strokes.max(1) {
        let mut x = rng.randint(0, w as i32 - 1) as f32;
        let mut y = rng.randint(0, h as i32 - 1) as f32;
        let mut heading = rng.random_f32() * std::f32::consts::TAU;

        let path_len = ((w + h) as f32 * 1.5 / step_len) as i32;
        for _ in 0..path_len.max(1) {
            let best = best_fan_direction(pre, x, y, heading, edge_sensitivity, rng);
            heading = best;

            let mut nx = x + heading.cos() * step_len;
            let mut ny = y + heading.sin() * step_len;

            if nx < 0.0 || nx >= w as f32 {
                heading = std::f32::consts::PI - heading;
                nx = x + heading.cos() * step_len;
            }
            if ny < 0.0 || ny >= h as f32 {
                heading = -heading;
                ny = y + heading.sin() * step_len;
            }
            nx = nx.clamp(0.0, (w - 1) as f32);
            ny = ny.clamp(0.0, (h - 1) as f32);

            draw_line_segment_mut(&mut canvas, (x, y), (nx, ny), Luma([20]));
            x = nx;
            y = ny;
        }
    }

    canvas
}

/// Sample a fan of candidate headings around the current one and drift
/// toward whichever direction sits on the strongest nearby edge.
fn best_fan_direction(
    pre: &Preprocessed,
    x: f32,
    y: f32,
    heading: f32,
    edge_sensitivity: f32,
    rng: &mut Prng,
) -> f32 {
    let (w, h) = pre.edges.dimensions();
    let mut best_heading = heading;
    let mut best_score = -1.0f32;

    for i in 0..FAN_COUNT {
        let offset = (i as f32 / FAN_COUNT as f32 - 0.5) * FAN_SPREAD;
        let candidate = heading + offset;
        let sx = (x + candidate.cos() * 4.0).clamp(0.0, (w - 1) as f32) as u32;
        let sy = (y + candidate.sin() * 4.0).clamp(0.0, (h - 1) as f32) as u32;
        let edge = pre.edges.get_pixel(sx, sy).0[0] as f32;
        let score = edge + rng.random_f32() * edge_sensitivity * 0.1;
        if score > best_score {
            best_score = score;
            best_heading = candidate;
        }
    }

    // Small continuous drift keeps the stroke from snapping abruptly.
    best_heading + (rng.random_f32() - 0.5) * 0.05
}
