//! Input/output operations and error handling
//!
//! Everything that touches the filesystem or the terminal lives here; the
//! core modules produce and consume canvases without performing any I/O.

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Image decoding, encoding, and catalog loading
pub mod image;
/// Render progress display
pub mod progress;
