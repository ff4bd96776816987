//! Distance calculations over mosaic grid cells
//!
//! Spacing constraints are measured between cell coordinates, not pixels,
//! so a minimum distance of 2.0 keeps reuses at least two grid slots apart
//! in the Euclidean sense.

/// Euclidean distance between two grid-cell coordinates
pub fn cell_distance(a: [u32; 2], b: [u32; 2]) -> f64 {
    let dx = f64::from(a[0]) - f64::from(b[0]);
    let dy = f64::from(a[1]) - f64::from(b[1]);
    dx.hypot(dy)
}
