//! Metric summaries and the distances between them
//!
//! Summaries use truncating integer means: per-pixel intensity is
//! `(r + g + b) / 3` and the regional mean divides by the pixel count with
//! the remainder discarded. Distances are real-valued, reflexive, and
//! symmetric; the triangle inequality holds for the base variants but is
//! not guaranteed once quadrant sums are involved.

use crate::canvas::grid::{Canvas, Region};
use crate::io::error::{MosaicError, Result};
use crate::metric::kind::MetricKind;

/// An opaque summary of one rectangular pixel region
///
/// A freshly built value is a zeroed skeleton; it only carries a meaningful
/// summary after [`Metric::summarize`] has run. The quad variant owns four
/// sub-metrics, so decomposition depth is a property of the value rather
/// than the type.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    /// Mean of per-pixel `(R+G+B)/3` over the region
    Intensity {
        /// Truncated mean intensity
        mean: i64,
    },
    /// Independent per-channel means over the region
    Rgb {
        /// Truncated means as `[red, green, blue]`
        mean: [i64; 3],
    },
    /// One sub-metric per quadrant: upper-left, upper-right, lower-left,
    /// lower-right
    Quad(Box<[Metric; 4]>),
}

impl Metric {
    /// Build a quad skeleton wrapping four empty sub-metrics of `base`
    pub fn quad_of(base: MetricKind) -> Self {
        Self::Quad(Box::new([
            base.empty(),
            base.empty(),
            base.empty(),
            base.empty(),
        ]))
    }

    /// Name of this summary's variant, used in mismatch errors
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Intensity { .. } => "intensity",
            Self::Rgb { .. } => "rgb",
            Self::Quad(_) => "quad",
        }
    }

    /// Independent copy of this metric and its current summary
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Compute and store the summary of `region`, replacing any previous one
    ///
    /// A zero-area region summarizes to zero. Quad variants halve the
    /// region with truncating division; when width or height is odd the
    /// remainder row and column are dropped from all four quadrants.
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` if `region` does not lie inside `canvas`.
    pub fn summarize(&mut self, canvas: &Canvas, region: Region) -> Result<()> {
        canvas.check_region(region)?;
        match self {
            Self::Intensity { mean } => {
                let mut sum = 0i64;
                for_each_pixel(canvas, region, |[r, g, b]| {
                    sum += (i64::from(r) + i64::from(g) + i64::from(b)) / 3;
                });
                *mean = truncated_mean(sum, region.area());
            }
            Self::Rgb { mean } => {
                let mut sums = [0i64; 3];
                for_each_pixel(canvas, region, |[r, g, b]| {
                    sums[0] += i64::from(r);
                    sums[1] += i64::from(g);
                    sums[2] += i64::from(b);
                });
                for (channel, sum) in mean.iter_mut().zip(sums) {
                    *channel = truncated_mean(sum, region.area());
                }
            }
            Self::Quad(quadrants) => {
                let half_width = region.width / 2;
                let half_height = region.height / 2;
                let origins = [
                    (region.x, region.y),
                    (region.x + half_width, region.y),
                    (region.x, region.y + half_height),
                    (region.x + half_width, region.y + half_height),
                ];
                for (sub, (x, y)) in quadrants.iter_mut().zip(origins) {
                    sub.summarize(canvas, Region::new(x, y, half_width, half_height))?;
                }
            }
        }
        Ok(())
    }

    /// Summarize the whole canvas
    ///
    /// # Errors
    ///
    /// Never fails for a valid canvas; propagates region errors otherwise.
    pub fn summarize_all(&mut self, canvas: &Canvas) -> Result<()> {
        self.summarize(canvas, canvas.full_region())
    }

    /// Distance between two summaries of the same variant
    ///
    /// # Errors
    ///
    /// Returns `VariantMismatch` if the variants differ, including between
    /// the sub-metrics of two quads.
    pub fn distance_to(&self, other: &Self) -> Result<f64> {
        match (self, other) {
            (Self::Intensity { mean: a }, Self::Intensity { mean: b }) => {
                Ok((a - b).abs() as f64)
            }
            (Self::Rgb { mean: a }, Self::Rgb { mean: b }) => {
                let squared: i64 = a
                    .iter()
                    .zip(b)
                    .map(|(left, right)| (left - right).pow(2))
                    .sum();
                Ok((squared as f64).sqrt())
            }
            (Self::Quad(a), Self::Quad(b)) => {
                let mut total = 0.0;
                for (left, right) in a.iter().zip(b.iter()) {
                    total += left.distance_to(right)?;
                }
                Ok(total)
            }
            (left, right) => Err(MosaicError::VariantMismatch {
                left: left.variant_name(),
                right: right.variant_name(),
            }),
        }
    }
}

/// Visit every pixel of a validated region in scan order
fn for_each_pixel(canvas: &Canvas, region: Region, mut visit: impl FnMut([u8; 3])) {
    for y in region.y..region.y + region.height {
        for x in region.x..region.x + region.width {
            if let Ok(pixel) = canvas.get(x, y) {
                visit(pixel);
            }
        }
    }
}

/// Integer mean with truncation; zero-area regions summarize to zero
const fn truncated_mean(sum: i64, area: usize) -> i64 {
    if area == 0 { 0 } else { sum / area as i64 }
}
