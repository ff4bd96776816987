//! Per-pixel filters applied to whole canvases
//!
//! Filters are a closed set resolved by name at startup rather than a
//! dynamically dispatched registry; an unrecognized name fails with
//! `UnknownVariant` instead of a construction error.

use std::str::FromStr;

use crate::canvas::grid::{Canvas, Rgb};
use crate::io::error::{MosaicError, Result};

/// Grayscale weights reflect human channel sensitivity: green dominates,
/// then red, then blue.
const GRAYSCALE_WEIGHTS: [f64; 3] = [0.222, 0.707, 0.071];

/// Channel delta used by the named brightness and tint filters
const NAMED_SHIFT_DELTA: i32 = 25;

/// Names accepted by [`Filter::from_str`]
pub const KNOWN_FILTERS: &str = "identity grayscale lighter darker redder greener bluer";

/// A per-pixel transformation over a frozen source canvas
///
/// Each variant computes the three output channels for a coordinate from
/// the pre-filter snapshot it is handed, never from partially written
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Returns every pixel unchanged
    Identity,
    /// Weighted-luminance gray: all three channels take the same value
    Grayscale,
    /// Adds fixed per-channel deltas, clamping the result to `[0, 255]`
    Shift([i32; 3]),
}

impl Filter {
    /// Uniform brightening shift
    pub const fn lighter() -> Self {
        Self::Shift([NAMED_SHIFT_DELTA; 3])
    }

    /// Uniform darkening shift
    pub const fn darker() -> Self {
        Self::Shift([-NAMED_SHIFT_DELTA; 3])
    }

    /// Red-only boost
    pub const fn redder() -> Self {
        Self::Shift([NAMED_SHIFT_DELTA, 0, 0])
    }

    /// Green-only boost
    pub const fn greener() -> Self {
        Self::Shift([0, NAMED_SHIFT_DELTA, 0])
    }

    /// Blue-only boost
    pub const fn bluer() -> Self {
        Self::Shift([0, 0, NAMED_SHIFT_DELTA])
    }

    /// Compute the filtered pixel at `(x, y)` of `source`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside `source`.
    pub fn filtered(&self, source: &Canvas, x: usize, y: usize) -> Result<Rgb> {
        let [r, g, b] = source.get(x, y)?;
        Ok(match self {
            Self::Identity => [r, g, b],
            Self::Grayscale => {
                let gray = GRAYSCALE_WEIGHTS[0]
                    .mul_add(f64::from(r), GRAYSCALE_WEIGHTS[1] * f64::from(g))
                    + GRAYSCALE_WEIGHTS[2] * f64::from(b);
                let gray = (gray as i32).clamp(0, 255) as u8;
                [gray, gray, gray]
            }
            Self::Shift([dr, dg, db]) => [
                (i32::from(r) + dr).clamp(0, 255) as u8,
                (i32::from(g) + dg).clamp(0, 255) as u8,
                (i32::from(b) + db).clamp(0, 255) as u8,
            ],
        })
    }
}

impl FromStr for Filter {
    type Err = MosaicError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "identity" => Ok(Self::Identity),
            "grayscale" => Ok(Self::Grayscale),
            "lighter" => Ok(Self::lighter()),
            "darker" => Ok(Self::darker()),
            "redder" => Ok(Self::redder()),
            "greener" => Ok(Self::greener()),
            "bluer" => Ok(Self::bluer()),
            _ => Err(MosaicError::UnknownVariant {
                kind: "filter",
                name: name.to_string(),
                known: KNOWN_FILTERS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "sepia".parse::<Filter>();
        assert!(matches!(
            err,
            Err(MosaicError::UnknownVariant { kind: "filter", .. })
        ));
    }

    #[test]
    fn test_named_shifts_resolve() {
        assert_eq!("lighter".parse::<Filter>().ok(), Some(Filter::lighter()));
        assert_eq!("darker".parse::<Filter>().ok(), Some(Filter::darker()));
        assert_eq!(
            "bluer".parse::<Filter>().ok(),
            Some(Filter::Shift([0, 0, 25]))
        );
    }
}
