//! Bilinear resampling support for canvas scaling
//!
//! Maps destination pixel centers back into the source grid and blends the
//! four surrounding samples. Sampling at integer source positions reproduces
//! the source exactly, which keeps same-size scaling an identity operation.

/// Fractional source position and blend weights for one destination sample
#[derive(Debug, Clone, Copy)]
pub struct SamplePoint {
    /// Index of the lower of the two source samples
    pub lower: usize,
    /// Index of the upper source sample (clamped to the last valid index)
    pub upper: usize,
    /// Weight of the upper sample, in `[0, 1)`
    pub fraction: f64,
}

/// Locate the source samples contributing to destination index `dest`
///
/// Uses pixel-center mapping: destination center `dest + 0.5` is projected
/// into source space and the two straddling sample indices are returned.
pub fn sample_point(dest: usize, dest_len: usize, src_len: usize) -> SamplePoint {
    debug_assert!(dest_len > 0 && src_len > 0);

    let scale = src_len as f64 / dest_len as f64;
    let center = (dest as f64 + 0.5) * scale - 0.5;
    let clamped = center.clamp(0.0, (src_len - 1) as f64);

    let lower = clamped.floor() as usize;
    let upper = (lower + 1).min(src_len - 1);
    SamplePoint {
        lower,
        upper,
        fraction: clamped - lower as f64,
    }
}

/// Linear blend between two channel samples
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend four corner samples bilinearly and round to a channel value
pub fn blend_bilinear(
    top_left: f64,
    top_right: f64,
    bottom_left: f64,
    bottom_right: f64,
    x_fraction: f64,
    y_fraction: f64,
) -> u8 {
    let top = lerp(top_left, top_right, x_fraction);
    let bottom = lerp(bottom_left, bottom_right, x_fraction);
    lerp(top, bottom, y_fraction).round().clamp(0.0, 255.0) as u8
}
