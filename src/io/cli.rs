//! Command-line interface for one-shot pattern generation

use clap::Parser;
use rand::Rng;
use std::io;

use crate::algorithm::engine::generate_seeded;
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::render::{render_grid, render_tally};

#[derive(Parser)]
#[command(name = "floortile")]
#[command(
    author,
    version,
    about = "Generate a random floor tiling pattern and print it in color"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Disable ANSI colors and print plain digits
    #[arg(short, long)]
    pub no_color: bool,

    /// Suppress the per-kind placement summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if output should carry ANSI styling
    pub const fn use_color(&self) -> bool {
        !self.no_color
    }

    /// Check if the placement summary should be printed
    pub const fn show_tally(&self) -> bool {
        !self.quiet
    }

    /// Validate the requested grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn validate(&self) -> Result<()> {
        validate_dimension("rows", self.rows)?;
        validate_dimension("columns", self.columns)
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }

    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at most {MAX_GRID_DIMENSION}"),
        ));
    }

    Ok(())
}

/// Orchestrates a single generate-then-render run
pub struct PatternRunner {
    cli: Cli,
}

impl PatternRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate one pattern and write it to standard output
    ///
    /// An explicit `--seed` reproduces the exact same pattern; otherwise
    /// the seed is drawn from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if dimension validation fails or terminal output
    /// cannot be written.
    pub fn run(&self) -> Result<()> {
        self.cli.validate()?;

        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());
        let grid = generate_seeded(self.cli.rows, self.cli.columns, seed);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.cli.show_tally() {
            render_tally(&mut out, grid.tally())?;
        }

        render_grid(&mut out, &grid, self.cli.use_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimension() {
        let cli = Cli {
            rows: 0,
            columns: DEFAULT_COLUMNS,
            seed: None,
            no_color: false,
            quiet: false,
        };
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_dimension() {
        let cli = Cli {
            rows: DEFAULT_ROWS,
            columns: MAX_GRID_DIMENSION + 1,
            seed: None,
            no_color: false,
            quiet: false,
        };
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_accepts_defaults() {
        let cli = Cli {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: Some(7),
            no_color: true,
            quiet: true,
        };
        assert!(cli.validate().is_ok());
        assert!(!cli.use_color());
        assert!(!cli.show_tally());
    }
}
