//! Render progress display
//!
//! A thin observer over the assembler's per-cell callback. Progress is
//! best-effort reporting only; the render contract does not depend on it.

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking rendered cells
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a bar sized to the render's total cell count
    ///
    /// The length is fixed here; `observe` only advances the position.
    pub fn new(total_cells: u64) -> Self {
        let bar = ProgressBar::new(total_cells);
        bar.set_style(CELL_STYLE.clone());
        Self { bar }
    }

    /// Record that `done` cells have been committed
    pub fn observe(&self, done: usize) {
        self.bar.set_position(done as u64);
    }

    /// Clear the bar once the render finishes or aborts
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
