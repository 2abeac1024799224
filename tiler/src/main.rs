//! Height-grid tile renderer.
//!
//! Reads an ASCII grid elevation file and writes a grayscale PNG where
//! low ground renders light and high ground dark. The floor and ceiling
//! of the shading range default to the grid's observed extremes and can
//! be pinned explicitly for consistent shading across adjacent tiles.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use renderer::png::create_png_gray;
use renderer::ShadeTracker;

#[derive(Parser, Debug)]
#[command(name = "tiler")]
#[command(about = "Render height grid files to grayscale PNG tiles")]
struct Args {
    /// Grid data file to render
    #[arg(short, long)]
    input: PathBuf,

    /// PNG results file
    #[arg(short, long)]
    output: PathBuf,

    /// Height shaded fully white (default: grid minimum minus a margin)
    #[arg(short, long)]
    floor: Option<f32>,

    /// Height shaded fully black (default: grid maximum plus a margin)
    #[arg(short, long)]
    ceiling: Option<f32>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let grid = asc_grid::parse_grid_file(&args.input)
        .with_context(|| format!("failed to read grid from {}", args.input.display()))?;

    let bounds = render::effective_bounds(&grid, args.floor, args.ceiling);
    if bounds.ceiling <= bounds.floor {
        bail!(
            "ceiling {} must be above floor {}",
            bounds.ceiling,
            bounds.floor
        );
    }

    info!(
        floor = bounds.floor,
        ceiling = bounds.ceiling,
        "creating image"
    );

    let mut tracker = ShadeTracker::new();
    let pixels = render::render_grid_image(&grid, bounds, &mut tracker);

    let png = create_png_gray(&pixels, grid.ncols(), grid.nrows())?;
    fs::write(&args.output, &png)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        nrows = grid.nrows(),
        ncols = grid.ncols(),
        min_height = grid.min_height(),
        max_height = grid.max_height(),
        min_shade = tracker.min_shade(),
        max_shade = tracker.max_shade(),
        "render complete"
    );

    Ok(())
}
