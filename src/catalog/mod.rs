//! The tile catalog: every candidate tile with its summary and bookkeeping
//!
//! Entries keep their insertion order; that order is what the assembler's
//! tie-break preserves. All tiles in a catalog share one size and one
//! active metric kind.

/// Per-tile canvas, summary, and placement record
pub mod entry;
/// Sort orders and selection predicates over catalog entries
pub mod order;

pub use entry::TileEntry;
pub use order::{CatalogOrder, SelectionRule};

use crate::canvas::filter::Filter;
use crate::canvas::grid::Canvas;
use crate::io::error::{Result, invalid_request};
use crate::metric::kind::MetricKind;

/// Ordered collection of tiles sharing one size and metric kind
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TileEntry>,
    kind: MetricKind,
}

impl Catalog {
    /// Create an empty catalog summarizing with `kind`
    pub const fn new(kind: MetricKind) -> Self {
        Self {
            entries: Vec::new(),
            kind,
        }
    }

    /// The metric kind all entries are currently summarized with
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[TileEntry] {
        &self.entries
    }

    /// Mutable access to one entry by catalog index
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut TileEntry> {
        self.entries.get_mut(index)
    }

    /// Common tile size as `(width, height)`, if any tile has been added
    pub fn tile_size(&self) -> Option<(usize, usize)> {
        self.entries
            .first()
            .map(|entry| (entry.canvas().width(), entry.canvas().height()))
    }

    /// Summarize `canvas` with the active kind and append it
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the canvas size differs from the tiles
    /// already in the catalog.
    pub fn add(&mut self, canvas: Canvas) -> Result<()> {
        if let Some((width, height)) = self.tile_size() {
            if canvas.width() != width || canvas.height() != height {
                return Err(invalid_request(
                    "tile dimensions",
                    &format!("{}x{}", canvas.width(), canvas.height()),
                    &format!("catalog tiles are {width}x{height}"),
                ));
            }
        }
        let mut metric = self.kind.empty();
        metric.summarize_all(&canvas)?;
        self.entries.push(TileEntry::new(canvas, metric));
        Ok(())
    }

    /// Switch the active metric kind and re-summarize every entry
    ///
    /// # Errors
    ///
    /// Propagates summarization errors; entries already re-summarized keep
    /// their new snapshots.
    pub fn set_metric_kind(&mut self, kind: MetricKind) -> Result<()> {
        self.kind = kind;
        for entry in &mut self.entries {
            let mut metric = kind.empty();
            metric.summarize_all(entry.canvas())?;
            entry.set_metric(metric);
        }
        Ok(())
    }

    /// Clear every entry's placement history
    pub fn reset_placements(&mut self) {
        for entry in &mut self.entries {
            entry.reset_placements();
        }
    }

    /// Reorder entries; also changes the assembler's tie-break preference
    pub fn sort(&mut self, ordering: CatalogOrder) {
        ordering.sort(&mut self.entries);
    }

    /// Append a filtered copy of every entry accepted by `rule`
    ///
    /// Copies carry the original label plus the derived suffix and are
    /// summarized with the active kind. Returns how many entries were
    /// added.
    ///
    /// # Errors
    ///
    /// Propagates filter and summarization errors.
    pub fn derive_filtered(&mut self, rule: SelectionRule, filter: &Filter) -> Result<usize> {
        let original_len = self.entries.len();
        let mut added = 0;
        for index in 0..original_len {
            let Some(entry) = self.entries.get(index) else {
                break;
            };
            if !rule.accepts(entry) {
                continue;
            }
            let label = format!("{}{}", entry.canvas().label(), order::DERIVED_SUFFIX);
            let mut canvas = entry.canvas().copy(label);
            canvas.apply_filter(filter)?;
            let mut metric = self.kind.empty();
            metric.summarize_all(&canvas)?;
            self.entries.push(TileEntry::new(canvas, metric));
            added += 1;
        }
        Ok(added)
    }

    /// Compose every tile into one grid canvas for external display
    ///
    /// Uses roughly square proportions: `floor(sqrt(n))` columns and as
    /// many rows as needed. Unused slots in the last row stay black.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the catalog is empty.
    pub fn contact_sheet(&self, label: impl Into<String>) -> Result<Canvas> {
        let Some((width, height)) = self.tile_size() else {
            return Err(invalid_request(
                "catalog",
                &"empty",
                &"cannot compose a contact sheet without tiles",
            ));
        };
        let count = self.entries.len();
        let columns = ((count as f64).sqrt() as usize).max(1);
        let rows = count.div_ceil(columns);

        let mut sheet = Canvas::new(label, columns * width, rows * height)?;
        for (index, entry) in self.entries.iter().enumerate() {
            let column = index % columns;
            let row = index / columns;
            sheet.overlay(column * width, row * height, entry.canvas())?;
        }
        Ok(sheet)
    }
}
