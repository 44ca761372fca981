//! Idioms shared by every style kernel (spec §4.2 "Shared idioms").
//! Each helper here is pure and stateless; kernels compose them freely.

/// Anti-aliased transition across a threshold. `e` is the raw value being
/// gated (typically an edge magnitude), `t` the threshold, `s` the
/// softness. Returns `0.0` below `t` (unchanged), ramps `0..1` through the
/// cubic smoothstep across the band, and saturates at `1.0` at `e >= t+s`.
pub fn smoothstep_band(e: f32, t: f32, s: f32) -> f32 {
    if e <= t {
        0.0
    } else if e >= t + s {
        1.0
    } else {
        let u = (e - t) / s;
        u * u * (3.0 - 2.0 * u)
    }
}

/// Piecewise quadratic tonal remap that compresses midtones (spec §4.2
/// "S-curve tone"). `t` is normalized to `[0, 1]`.
pub fn s_curve(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

/// Perpendicular (modular) distance of pixel `(x, y)` from the nearest line
/// in a family of parallel lines at angle `theta` (radians) and spacing
/// `spacing` (spec §4.2 "Modular distance field hatching", GLOSSARY
/// "d-grid hatching").
pub fn d_grid_distance(x: f32, y: f32, theta: f32, spacing: f32) -> f32 {
    let (sin_a, cos_a) = theta.sin_cos();
    let d = -x * sin_a + y * cos_a;
    d.rem_euclid(spacing)
}

/// Whether a pixel at modular distance `d` (from [`d_grid_distance`]) falls
/// on a line of half-width `half_width` within a line-family of period
/// `spacing`.
pub fn on_hatch_line(d: f32, half_width: f32, spacing: f32) -> bool {
    d < half_width || d > spacing - half_width
}

/// Multiplicative "pigment" darkening factor (spec §4.2, GLOSSARY
/// "Multiplicative ink"): `v <- v * scale` where
/// `scale = 1 - alpha*(1 - ink/255)`.
pub fn ink_scale(alpha: f32, ink: f32) -> f32 {
    1.0 - alpha * (1.0 - ink / 255.0)
}
