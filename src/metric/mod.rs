//! Region summaries and distances between them
//!
//! A metric reduces a rectangular pixel region to a comparable summary and
//! defines a distance between two summaries of the same shape. The quad
//! variant recursively decomposes a region into quadrants, wrapping any
//! base variant.

/// Closed set of metric variants resolvable by name
pub mod kind;
/// Summary values and distance computation
pub mod summary;

pub use kind::MetricKind;
pub use summary::Metric;
