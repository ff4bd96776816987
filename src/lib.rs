//! Photomosaic rendering from a catalog of small tile images
//!
//! The pipeline replaces each block of a target picture with the catalog
//! tile whose regional summary is closest, under a per-tile reuse cap and a
//! minimum spacing between reuses of the same tile.

#![forbid(unsafe_code)]

/// Greedy constrained tile assignment and rendering
pub mod assembler;
/// Codec-independent pixel buffer and per-pixel filters
pub mod canvas;
/// Tile catalog with per-tile usage and placement bookkeeping
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Shared numeric helpers
pub mod math;
/// Region summaries and distances between them
pub mod metric;

pub use io::error::{MosaicError, Result};
