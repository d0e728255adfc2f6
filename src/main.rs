//! CLI entry point for the wave function collapse map generator

use clap::Parser;
use wavemap::io::cli::{Cli, run};

fn main() -> wavemap::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
