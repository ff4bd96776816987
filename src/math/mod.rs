//! Mathematical utilities for the mosaic pipeline

/// Euclidean distance over grid-cell coordinates
pub mod geometry;
/// Bilinear interpolation for canvas resampling
pub mod interpolation;
