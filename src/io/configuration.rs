//! Pipeline constants and runtime configuration defaults

/// File extensions recognized when scanning a tile directory
pub const TILE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Default width catalog tiles are scaled to on load
pub const DEFAULT_TILE_WIDTH: u32 = 40;
/// Default height catalog tiles are scaled to on load
pub const DEFAULT_TILE_HEIGHT: u32 = 40;

/// Default pixel width of one mosaic cell
pub const DEFAULT_SAMPLE_WIDTH: u32 = 16;
/// Default reuse cap per tile within one render
pub const DEFAULT_MAX_REUSE: u32 = 3;
/// Default minimum spacing between reuses, in grid cells
pub const DEFAULT_MIN_DISTANCE: f64 = 0.0;

/// Default metric name when none is given
pub const DEFAULT_METRIC: &str = "rgb";

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
