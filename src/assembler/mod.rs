//! Greedy constrained assembly of the output mosaic
//!
//! For every grid cell of the target the assembler summarizes the cell,
//! scans the still-live catalog entries in order, and commits the closest
//! eligible tile, honoring the reuse cap and spacing constraint. One render
//! owns its working set exclusively; placements land on the persistent
//! catalog.

/// Render parameters and their validation
pub mod request;
/// The render pass itself
pub mod render;

pub use render::{grid_dimensions, render, render_with_progress, select_best};
pub use request::MosaicRequest;
