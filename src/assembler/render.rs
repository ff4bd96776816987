//! The greedy constrained render pass
//!
//! Cells are visited in row-major order and each selection is a linear scan
//! of the live catalog entries; there is deliberately no spatial index. The
//! working set is a bit mask over catalog indices, so placement bookkeeping
//! mutates the persistent entries exactly once.

use bitvec::prelude::*;

use crate::assembler::request::MosaicRequest;
use crate::canvas::grid::{Canvas, Region};
use crate::catalog::Catalog;
use crate::io::error::{MosaicError, Result, invalid_request};
use crate::metric::summary::Metric;

/// Validated cell geometry for one render pass
struct GridPlan {
    columns: usize,
    rows: usize,
    sample_width: usize,
    sample_height: usize,
}

fn plan_grid(target: &Canvas, request: &MosaicRequest, catalog: &Catalog) -> Result<GridPlan> {
    let Some((tile_width, tile_height)) = catalog.tile_size() else {
        return Err(invalid_request(
            "catalog",
            &"empty",
            &"cannot render without tiles",
        ));
    };
    let sample_width = request.sample_width() as usize;
    let sample_height = request.sample_height(tile_width, tile_height)? as usize;

    let columns = target.width() / sample_width;
    let rows = target.height() / sample_height;
    if columns == 0 || rows == 0 {
        return Err(invalid_request(
            "sample_width",
            &request.sample_width(),
            &format!(
                "target {}x{} holds no whole {sample_width}x{sample_height} cell",
                target.width(),
                target.height()
            ),
        ));
    }
    Ok(GridPlan {
        columns,
        rows,
        sample_width,
        sample_height,
    })
}

/// Grid size as `(columns, rows)` for rendering `target` from `catalog`
///
/// Matches the geometry [`render_with_progress`] will use, so callers can
/// size progress reporting before the render starts.
///
/// # Errors
///
/// Returns `InvalidRequest` under the same conditions as
/// [`render_with_progress`] setup: an empty catalog, a cell height that
/// truncates to zero, or a grid with no whole cell.
pub fn grid_dimensions(
    target: &Canvas,
    request: &MosaicRequest,
    catalog: &Catalog,
) -> Result<(usize, usize)> {
    plan_grid(target, request, catalog).map(|plan| (plan.columns, plan.rows))
}

/// Pick the closest eligible live entry for one cell
///
/// Scans `live` indices in catalog order with a strict less-than
/// comparison, so the first entry among equal distances wins and catalog
/// order is the tie-break.
///
/// # Errors
///
/// Returns `NoEligibleTile` when no live entry satisfies the spacing
/// constraint, or `VariantMismatch` if a stored summary disagrees with the
/// cell summary's variant.
pub fn select_best(
    catalog: &Catalog,
    live: &BitSlice,
    cell: [u32; 2],
    cell_metric: &Metric,
    min_distance: f64,
) -> Result<usize> {
    let mut best: Option<usize> = None;
    let mut best_distance = f64::INFINITY;

    for index in live.iter_ones() {
        let Some(entry) = catalog.entries().get(index) else {
            continue;
        };
        if !entry.is_eligible(cell, min_distance) {
            continue;
        }
        let distance = entry.metric().distance_to(cell_metric)?;
        if best.is_none() || distance < best_distance {
            best = Some(index);
            best_distance = distance;
        }
    }

    best.ok_or(MosaicError::NoEligibleTile {
        column: cell[0],
        row: cell[1],
    })
}

/// Render a mosaic of `target` from `catalog`
///
/// Equivalent to [`render_with_progress`] with no observer.
///
/// # Errors
///
/// See [`render_with_progress`].
pub fn render(target: &Canvas, request: &MosaicRequest, catalog: &mut Catalog) -> Result<Canvas> {
    render_with_progress(target, request, catalog, |_, _| {})
}

/// Render a mosaic, reporting `(cells_done, cells_total)` after each cell
///
/// The output canvas covers `columns x rows` whole cells; any remainder
/// strip of the target narrower than one cell is cropped. Placements
/// recorded during the render remain on the catalog afterwards; callers
/// wanting a clean slate reset the catalog explicitly.
///
/// # Errors
///
/// Returns `InvalidRequest` when the catalog is empty or the grid would
/// have no cells, `NoEligibleTile` when a cell cannot be served (the whole
/// render aborts; partial mosaics are not valid output), and propagates
/// canvas and metric errors.
pub fn render_with_progress(
    target: &Canvas,
    request: &MosaicRequest,
    catalog: &mut Catalog,
    mut on_cell: impl FnMut(usize, usize),
) -> Result<Canvas> {
    let GridPlan {
        columns,
        rows,
        sample_width,
        sample_height,
    } = plan_grid(target, request, catalog)?;

    let mut live: BitVec = bitvec![1; catalog.len()];
    let mut scaled: Vec<Option<Canvas>> = vec![None; catalog.len()];
    let mut cell_metric = catalog.kind().empty();

    let total = rows * columns;
    let mut output = Canvas::new(
        format!("mosaic:{}", target.label()),
        columns * sample_width,
        rows * sample_height,
    )?;

    for row in 0..rows {
        for column in 0..columns {
            let x0 = column * sample_width;
            let y0 = row * sample_height;
            cell_metric.summarize(target, Region::new(x0, y0, sample_width, sample_height))?;

            let cell = [column as u32, row as u32];
            let best = select_best(catalog, &live, cell, &cell_metric, request.min_distance())?;

            if let Some(entry) = catalog.entry_mut(best) {
                entry.record_placement(cell);
                if entry.used() >= request.max_reuse() as usize {
                    live.set(best, false);
                }
            }

            let tile = match scaled.get_mut(best) {
                Some(slot) => {
                    if slot.is_none() {
                        let source = catalog
                            .entries()
                            .get(best)
                            .map(|entry| entry.canvas().scale(sample_width, sample_height))
                            .transpose()?;
                        *slot = source;
                    }
                    slot.as_ref()
                }
                None => None,
            };
            if let Some(tile) = tile {
                output.overlay(x0, y0, tile)?;
            }

            on_cell(row * columns + column + 1, total);
        }
    }

    Ok(output)
}
