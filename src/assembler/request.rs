//! Parameters of one mosaic render

use crate::io::error::{Result, invalid_request};

/// Validated parameters for a render pass
///
/// The sample width fixes the pixel width of each grid cell; the height is
/// derived from the catalog's tile aspect ratio so tiles are never
/// distorted. Spacing is measured in grid-cell units, not pixels.
#[derive(Debug, Clone, Copy)]
pub struct MosaicRequest {
    sample_width: u32,
    max_reuse: u32,
    min_distance: f64,
}

impl MosaicRequest {
    /// Validate and build a request
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when the sample width or reuse cap is zero,
    /// or the minimum distance is negative or not finite.
    pub fn new(sample_width: u32, max_reuse: u32, min_distance: f64) -> Result<Self> {
        if sample_width == 0 {
            return Err(invalid_request(
                "sample_width",
                &sample_width,
                &"must be at least 1 pixel",
            ));
        }
        if max_reuse == 0 {
            return Err(invalid_request(
                "max_reuse",
                &max_reuse,
                &"each tile must be usable at least once",
            ));
        }
        if !min_distance.is_finite() || min_distance < 0.0 {
            return Err(invalid_request(
                "min_distance",
                &min_distance,
                &"must be a non-negative finite number",
            ));
        }
        Ok(Self {
            sample_width,
            max_reuse,
            min_distance,
        })
    }

    /// Pixel width of each grid cell
    pub const fn sample_width(&self) -> u32 {
        self.sample_width
    }

    /// Maximum number of placements per tile within one render
    pub const fn max_reuse(&self) -> u32 {
        self.max_reuse
    }

    /// Minimum Euclidean distance between reuses, in grid cells
    pub const fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Cell height preserving the catalog tile's aspect ratio, truncated
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if truncation leaves no height, which
    /// happens for very wide tiles at small sample widths.
    pub fn sample_height(&self, tile_width: usize, tile_height: usize) -> Result<u32> {
        let height =
            (f64::from(self.sample_width) * tile_height as f64 / tile_width as f64) as u32;
        if height == 0 {
            return Err(invalid_request(
                "sample_width",
                &self.sample_width,
                &format!("derived cell height is zero for {tile_width}x{tile_height} tiles"),
            ));
        }
        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert!(MosaicRequest::new(0, 1, 0.0).is_err());
        assert!(MosaicRequest::new(8, 0, 0.0).is_err());
        assert!(MosaicRequest::new(8, 1, -1.0).is_err());
        assert!(MosaicRequest::new(8, 1, f64::NAN).is_err());
    }

    #[test]
    fn test_sample_height_preserves_aspect() {
        let request = MosaicRequest::new(10, 1, 0.0).unwrap_or_else(|_| unreachable!());
        assert_eq!(request.sample_height(20, 30).ok(), Some(15));
        // Truncation, not rounding
        assert_eq!(request.sample_height(30, 20).ok(), Some(6));
    }

    #[test]
    fn test_sample_height_of_zero_is_rejected() {
        let request = MosaicRequest::new(1, 1, 0.0).unwrap_or_else(|_| unreachable!());
        assert!(request.sample_height(100, 10).is_err());
    }
}
