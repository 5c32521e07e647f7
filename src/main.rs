//! CLI entry point for the random greedy floor tiling generator

use clap::Parser;
use floortile::io::cli::{Cli, PatternRunner};

fn main() -> floortile::Result<()> {
    let cli = Cli::parse();
    let runner = PatternRunner::new(cli);
    runner.run()
}
