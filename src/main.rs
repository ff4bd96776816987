//! CLI entry point for the photomosaic renderer

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    MosaicRunner::new(cli).run()
}
