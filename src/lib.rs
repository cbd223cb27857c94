//! Mosaicprep: split large mosaic images into tiles for segment annotation.
//!
//! Mosaicprep takes one large survey mosaic plus a legend CSV and produces a
//! grid of PNG tiles together with a `config.json` manifest that a downstream
//! segment-annotator consumes. Tiling is deterministic: the same mosaic and
//! legend always produce the same tiles and a byte-identical manifest.
//!
//! # Modules
//!
//! - [`grid`]: deterministic grid partitioning (the core algorithm)
//! - [`manifest`]: manifest construction and JSON serialization
//! - [`legend`]: legend CSV reading (label list)
//! - [`mosaic`]: mosaic decode and tile encode
//! - [`error`]: error types for mosaicprep operations

pub mod error;
pub mod grid;
pub mod legend;
pub mod manifest;
pub mod mosaic;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

pub use error::MosaicPrepError;
pub use manifest::Manifest;

/// Grid divisions along each axis when none are given on the command line.
///
/// Ten divisions is the sample-window policy of the survey pipeline this tool
/// was built for; see [`grid::partition`] for how the window size follows.
pub const DEFAULT_DIVISIONS: u32 = 10;

/// Directory that receives one tile subdirectory per mosaic.
const IMAGE_DIR: &str = "data/images";

/// Directory the manifest's annotation URLs point into. Never created here;
/// the downstream annotation tool owns it.
const ANNOTATION_DIR: &str = "data/annotations";

/// Path the manifest is written to.
const CONFIG_PATH: &str = "data/config.json";

/// The mosaicprep CLI application.
#[derive(Parser)]
#[command(name = "mosaicprep")]
#[command(version, author, about)]
struct Cli {
    /// Path to the mosaic image file.
    #[arg(short = 'i', long)]
    image_path: PathBuf,

    /// Path to the legend CSV file.
    #[arg(short = 'l', long)]
    legend_path: PathBuf,

    /// Grid divisions along each axis.
    #[arg(long, default_value_t = DEFAULT_DIVISIONS)]
    divisions: u32,

    /// Print nothing on success.
    #[arg(short, long)]
    quiet: bool,

    /// Print one line per tile written.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

/// How chatty a run is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Configuration for one tiling run.
///
/// Everything `run_prep` needs is carried here explicitly; there is no
/// process-wide argument state.
#[derive(Clone, Debug)]
pub struct PrepConfig {
    pub image_path: PathBuf,
    pub legend_path: PathBuf,
    pub divisions: u32,
    pub verbosity: Verbosity,
}

/// Run the mosaicprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), MosaicPrepError> {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = PrepConfig {
        image_path: cli.image_path,
        legend_path: cli.legend_path,
        divisions: cli.divisions,
        verbosity,
    };

    run_prep(&config)?;
    Ok(())
}

/// Execute one tiling run: read the legend and mosaic, partition, write every
/// tile, then write the manifest.
///
/// Tile writes are fail-fast; the manifest is written only after all tiles
/// succeeded, so a failed run never leaves a `config.json` behind.
pub fn run_prep(config: &PrepConfig) -> Result<Manifest, MosaicPrepError> {
    if config.verbosity != Verbosity::Quiet {
        println!("Processing");
        println!("Image: {}", config.image_path.display());
        println!("Legend: {}", config.legend_path.display());
    }

    let labels = legend::read_legend(&config.legend_path)?;
    let mosaic = mosaic::read_mosaic(&config.image_path)?;
    let (width, height) = mosaic.dimensions();

    let regions = grid::partition(height, width, config.divisions)?;

    let stem = config
        .image_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| MosaicPrepError::InvalidImagePath {
            path: config.image_path.clone(),
        })?;
    let image_base = format!("{}/{}", IMAGE_DIR, stem);
    let annotation_base = format!("{}/{}", ANNOTATION_DIR, stem);

    // Idempotent setup, kept out of the tiling loop. Also creates data/,
    // which the manifest lands in.
    fs::create_dir_all(&image_base)?;

    let manifest = manifest::build_manifest(labels, &regions, &image_base, &annotation_base);

    for (region, url) in regions.iter().zip(&manifest.image_urls) {
        mosaic::write_tile(&mosaic, region, Path::new(url))?;
        if config.verbosity == Verbosity::Verbose {
            println!("  {} ({}x{})", url, region.width(), region.height());
        }
    }

    manifest::write_manifest(Path::new(CONFIG_PATH), &manifest)?;

    if config.verbosity != Verbosity::Quiet {
        println!("Wrote {} tiles to {}", regions.len(), image_base);
        println!("Manifest: {}", CONFIG_PATH);
    }

    Ok(manifest)
}
