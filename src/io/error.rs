//! Error types shared by every layer of the mosaic pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Pixel coordinate outside the canvas extent
    OutOfBounds {
        /// Requested x coordinate
        x: usize,
        /// Requested y coordinate
        y: usize,
        /// Canvas width in pixels
        width: usize,
        /// Canvas height in pixels
        height: usize,
    },

    /// Sub-region outside the canvas extent
    RegionOutOfBounds {
        /// Upper-left x of the region
        x: usize,
        /// Upper-left y of the region
        y: usize,
        /// Region width in pixels
        region_width: usize,
        /// Region height in pixels
        region_height: usize,
        /// Canvas width in pixels
        width: usize,
        /// Canvas height in pixels
        height: usize,
    },

    /// Color component outside `[0, 255]`
    InvalidChannel {
        /// Offered red value
        red: i32,
        /// Offered green value
        green: i32,
        /// Offered blue value
        blue: i32,
    },

    /// Two metric summaries of incompatible variants were compared
    VariantMismatch {
        /// Variant of the left-hand summary
        left: &'static str,
        /// Variant of the right-hand summary
        right: &'static str,
    },

    /// No catalog entry satisfies the spacing constraint for a cell
    ///
    /// Aborts the whole render; a partial mosaic is never valid output.
    NoEligibleTile {
        /// Grid column of the offending cell
        column: u32,
        /// Grid row of the offending cell
        row: u32,
    },

    /// A by-name lookup was given an unrecognized name
    UnknownVariant {
        /// What was being resolved ("metric", "filter", ...)
        kind: &'static str,
        /// The offending name
        name: String,
        /// Names the lookup does recognize
        known: &'static str,
    },

    /// Request or construction parameter validation failed
    InvalidRequest {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "Pixel ({x}, {y}) is outside the {width}x{height} canvas")
            }
            Self::RegionOutOfBounds {
                x,
                y,
                region_width,
                region_height,
                width,
                height,
            } => {
                write!(
                    f,
                    "Region {region_width}x{region_height} at ({x}, {y}) extends past the {width}x{height} canvas"
                )
            }
            Self::InvalidChannel { red, green, blue } => {
                write!(
                    f,
                    "Channel values ({red}, {green}, {blue}) must all lie in [0, 255]"
                )
            }
            Self::VariantMismatch { left, right } => {
                write!(f, "Cannot compare {left} summary against {right} summary")
            }
            Self::NoEligibleTile { column, row } => {
                write!(
                    f,
                    "No catalog tile satisfies the spacing constraint at cell ({column}, {row})"
                )
            }
            Self::UnknownVariant { kind, name, known } => {
                write!(f, "Unknown {kind} '{name}' (known: {known})")
            }
            Self::InvalidRequest {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid request error
pub fn invalid_request(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidRequest {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
