//! Pixel canvas and filtering
//!
//! This module contains the display- and codec-independent pixel buffer:
//! - Bounds-checked pixel access and pure pixel algebra
//! - Region extraction, overlay, and bilinear rescaling
//! - Whole-canvas filters applied against a frozen snapshot

/// Per-pixel filters resolved from a closed set of names
pub mod filter;
/// Dense RGB pixel grid with bounds-checked operations
pub mod grid;

pub use filter::Filter;
pub use grid::{Canvas, Region, Rgb};
