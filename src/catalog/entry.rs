//! One catalog tile with its summary and placement history

use crate::canvas::grid::Canvas;
use crate::math::geometry::cell_distance;
use crate::metric::summary::Metric;

/// A tile canvas paired with its metric snapshot and placement record
///
/// The placement list survives across renders until the catalog is
/// explicitly reset, so eligibility in a later render still sees earlier
/// placements unless the caller asks for a clean slate.
#[derive(Debug, Clone)]
pub struct TileEntry {
    canvas: Canvas,
    metric: Metric,
    placements: Vec<[u32; 2]>,
}

impl TileEntry {
    /// Pair a tile canvas with its precomputed summary
    pub const fn new(canvas: Canvas, metric: Metric) -> Self {
        Self {
            canvas,
            metric,
            placements: Vec::new(),
        }
    }

    /// The tile image
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The current whole-tile summary
    pub const fn metric(&self) -> &Metric {
        &self.metric
    }

    /// Replace the stored summary, used when the active metric kind changes
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Number of recorded placements
    pub fn used(&self) -> usize {
        self.placements.len()
    }

    /// Grid cells this tile has been placed at, in placement order
    pub fn placements(&self) -> &[[u32; 2]] {
        &self.placements
    }

    /// Append a grid coordinate to the placement record
    ///
    /// No cap is enforced here; the assembler owns the reuse limit.
    pub fn record_placement(&mut self, cell: [u32; 2]) {
        self.placements.push(cell);
    }

    /// Whether `candidate` keeps the spacing constraint from every prior
    /// placement
    ///
    /// An entry with no placements is always eligible.
    pub fn is_eligible(&self, candidate: [u32; 2], min_distance: f64) -> bool {
        self.placements
            .iter()
            .all(|&placed| cell_distance(placed, candidate) >= min_distance)
    }

    /// Forget all placements, e.g. before a fresh render
    pub fn reset_placements(&mut self) {
        self.placements.clear();
    }
}
