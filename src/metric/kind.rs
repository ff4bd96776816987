//! The closed set of metric variants and name resolution
//!
//! Metric selection is a startup-time choice from a fixed enumeration, not
//! a dynamically loaded registry. Unknown names fail with `UnknownVariant`.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MosaicError, Result};
use crate::metric::summary::Metric;

/// Names accepted by [`MetricKind::from_str`]
pub const KNOWN_METRICS: &str = "intensity rgb quad-intensity quad-rgb";

/// Which summary shape the catalog and assembler agree on
///
/// Every summary in one render pass is built from the same kind, so
/// distance comparisons never cross variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Mean of per-pixel `(R+G+B)/3` intensity
    Intensity,
    /// Independent per-channel means
    Rgb,
    /// Four intensity summaries, one per quadrant
    QuadIntensity,
    /// Four per-channel summaries, one per quadrant
    QuadRgb,
}

impl MetricKind {
    /// Build an unsummarized metric skeleton of this kind
    ///
    /// The value is only comparable after `summarize` has been called on it.
    pub fn empty(self) -> Metric {
        match self {
            Self::Intensity => Metric::Intensity { mean: 0 },
            Self::Rgb => Metric::Rgb { mean: [0; 3] },
            Self::QuadIntensity => Metric::quad_of(Self::Intensity),
            Self::QuadRgb => Metric::quad_of(Self::Rgb),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intensity => "intensity",
            Self::Rgb => "rgb",
            Self::QuadIntensity => "quad-intensity",
            Self::QuadRgb => "quad-rgb",
        };
        write!(f, "{name}")
    }
}

impl FromStr for MetricKind {
    type Err = MosaicError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "intensity" => Ok(Self::Intensity),
            "rgb" => Ok(Self::Rgb),
            "quad-intensity" => Ok(Self::QuadIntensity),
            "quad-rgb" => Ok(Self::QuadRgb),
            _ => Err(MosaicError::UnknownVariant {
                kind: "metric",
                name: name.to_string(),
                known: KNOWN_METRICS,
            }),
        }
    }
}
