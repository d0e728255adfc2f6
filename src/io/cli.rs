//! Command-line interface for generating terrain maps

use crate::algorithm::WaveFunctionCollapse;
use crate::io::configuration::{
    DEFAULT_CELL_PIXEL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_RETRIES, DEFAULT_MAX_STEPS,
    DEFAULT_OUTPUT, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::GenerationProgress;
use crate::tiles::{TileSet, biome};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which preset tileset to generate with
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomeChoice {
    /// Full seven-tile terrain set
    Terrain,
    /// Coastal water, sand, grass, and forest
    Ocean,
    /// Highland grass through snow
    Mountain,
}

impl BiomeChoice {
    /// Build a fresh tileset for this choice
    pub fn tileset(self) -> TileSet {
        match self {
            Self::Terrain => biome::terrain(),
            Self::Ocean => biome::ocean(),
            Self::Mountain => biome::mountain(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wavemap")]
#[command(
    version,
    about = "Generate terrain maps with adjacency-constrained wave function collapse"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Preset tileset to use
    #[arg(short, long, value_enum, default_value_t = BiomeChoice::Terrain)]
    pub biome: BiomeChoice,

    /// Retry budget for contradiction recovery
    #[arg(short, long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub retries: usize,

    /// Maximum steps per generation attempt
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Edge length of one cell in the exported image, in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXEL_SIZE)]
    pub cell_size: u32,

    /// Print a text dump of the final grid
    #[arg(short, long)]
    pub dump: bool,

    /// Show entropy counts for uncollapsed cells in the text dump
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Build the solver, drive it step by step, and export the result
///
/// # Errors
///
/// Returns an error if:
/// - The requested dimensions or limits fail validation
/// - The PNG export fails
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let mut solver = WaveFunctionCollapse::new(cli.width, cli.height, cli.biome.tileset(), cli.seed)?;
    solver.set_max_retries(cli.retries)?;
    solver.set_max_steps(cli.steps)?;

    let progress = GenerationProgress::new(solver.grid().total_cells(), cli.quiet);

    let final_message = loop {
        let outcome = solver.generate_step();
        progress.update(solver.grid().collapsed_count(), &outcome.message);
        if !outcome.proceed {
            break outcome.message;
        }
    };
    progress.finish(&final_message);

    if cli.dump {
        println!("{}", solver.render_text(cli.entropy));
    }
    if !cli.quiet {
        println!("{}", solver.statistics());
    }

    export_grid_as_png(solver.grid(), solver.tileset(), &cli.output, cli.cell_size)
}
