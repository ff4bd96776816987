//! Command-line interface for rendering a mosaic from a tile directory

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::assembler::render::{grid_dimensions, render_with_progress};
use crate::assembler::request::MosaicRequest;
use crate::canvas::filter::Filter;
use crate::io::configuration::{
    DEFAULT_MAX_REUSE, DEFAULT_METRIC, DEFAULT_MIN_DISTANCE, DEFAULT_SAMPLE_WIDTH,
    DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{load_catalog, load_target, save_canvas};
use crate::io::progress::RenderProgress;
use crate::metric::kind::MetricKind;

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from a catalog of tile images"
)]
/// Command-line arguments for the mosaic renderer
pub struct Cli {
    /// Image to rebuild as a mosaic
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Width catalog tiles are scaled to on load
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Height catalog tiles are scaled to on load
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Pixel width of each mosaic cell
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_WIDTH)]
    pub sample_width: u32,

    /// Maximum placements per tile within the render
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_REUSE)]
    pub max_reuse: u32,

    /// Minimum spacing between reuses, in grid cells
    #[arg(short = 'd', long, default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: f64,

    /// Metric used to compare regions (intensity, rgb, quad-intensity, quad-rgb)
    #[arg(short, long, default_value = DEFAULT_METRIC)]
    pub metric: String,

    /// Filter applied to tiles and target on load
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output path (defaults to the target name with a mosaic suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the load-render-save pipeline for one target
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the pipeline
    ///
    /// # Errors
    ///
    /// Returns the first error from argument resolution, catalog or target
    /// loading, rendering, or saving.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let kind: MetricKind = self.cli.metric.parse()?;
        let filter: Option<Filter> = self
            .cli
            .filter
            .as_deref()
            .map(|name| name.parse::<Filter>())
            .transpose()?;

        let mut catalog = load_catalog(
            &self.cli.tiles,
            self.cli.tile_width,
            self.cli.tile_height,
            kind,
            filter.as_ref(),
        )?;
        let target = load_target(&self.cli.target, filter.as_ref())?;

        let request = MosaicRequest::new(
            self.cli.sample_width,
            self.cli.max_reuse,
            self.cli.min_distance,
        )?;

        let (columns, rows) = grid_dimensions(&target, &request, &catalog)?;
        let progress = self
            .cli
            .should_show_progress()
            .then(|| RenderProgress::new((columns * rows) as u64));

        let outcome = render_with_progress(&target, &request, &mut catalog, |done, _| {
            if let Some(ref bar) = progress {
                bar.observe(done);
            }
        });
        if let Some(ref bar) = progress {
            bar.finish();
        }
        let mosaic = outcome?;

        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.cli.target));
        save_canvas(&mosaic, &output_path)?;

        if !self.cli.quiet {
            eprintln!(
                "Rendered {}x{} mosaic from {} tiles -> {}",
                mosaic.width(),
                mosaic.height(),
                catalog.len(),
                output_path.display()
            );
        }
        Ok(())
    }

    fn default_output_path(target: &Path) -> PathBuf {
        let stem = target.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
