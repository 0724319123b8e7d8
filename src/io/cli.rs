//! Command-line interface for the full packing sweep

use crate::algorithm::sizes::SizeSet;
use crate::algorithm::sweep::Sweep;
use crate::algorithm::verify::verify_all;
use crate::analysis::decompose::undecomposable;
use crate::io::configuration::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, MAX_BOARD_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_tilings;
use crate::io::progress::SweepProgress;
use crate::io::report::latex_table;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squarepack")]
#[command(
    author,
    version,
    about = "Exhaustively search for perfect square tilings of rectangular boards"
)]
/// Command-line arguments for the packing sweep tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maximum board height to sweep, inclusive
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: usize,

    /// Maximum board width to sweep, inclusive
    #[arg(short = 'w', long, default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: usize,

    /// Allowed square side lengths, tried in the given order
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub sizes: Option<Vec<usize>>,

    /// Directory for witness images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Skip writing witness images
    #[arg(long)]
    pub no_images: bool,

    /// Print the LaTeX summary table of solvable sizes
    #[arg(short, long)]
    pub table: bool,

    /// List solvable sizes with no single-cut decomposition
    #[arg(short = 'u', long)]
    pub undecomposable: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if witness images should be written
    pub const fn should_export_images(&self) -> bool {
        !self.no_images
    }
}

/// Orchestrates a full sweep: search, verification, export, and reporting
pub struct SweepProcessor {
    cli: Cli,
}

impl SweepProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the sweep according to CLI arguments
    ///
    /// Every witness is re-verified before any of it is reported or
    /// exported; a verification failure here means a search bug, so the
    /// whole batch aborts.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, witness verification, or
    /// image export fails.
    // The summary is the program's output, so printing is intentional here
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        self.validate_dimensions()?;
        let sizes = SizeSet::new(
            self.cli
                .sizes
                .clone()
                .unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
        )?;

        let mut sweep = Sweep::new(self.cli.max_height, self.cli.max_width, sizes.clone());
        let progress = self
            .cli
            .should_show_progress()
            .then(|| SweepProgress::new(sweep.board_count()));

        while let Some(step) = sweep.step() {
            if let Some(ref bar) = progress {
                bar.record(step.height, step.width, step.solved);
            }
        }
        if let Some(bar) = progress {
            bar.finish();
        }

        let max_size = verify_all(sweep.tilings(), &sizes)?;
        println!("Tilings found: {}", sweep.tilings().len());
        println!("Maximum square size: {max_size}");

        if self.cli.should_export_images() {
            let written = export_tilings(sweep.tilings(), &self.cli.output)?;
            println!("Witness images written: {written}");
        }

        if self.cli.table {
            println!("{}", latex_table(sweep.answers()));
        }

        if self.cli.undecomposable {
            let entries: Vec<String> = undecomposable(sweep.answers())
                .iter()
                .map(|&(height, width)| format!("{height}x{width}"))
                .collect();
            println!("Undecomposable: {}", entries.join(", "));
        }

        Ok(())
    }

    fn validate_dimensions(&self) -> Result<()> {
        for (name, value) in [
            ("max-height", self.cli.max_height),
            ("max-width", self.cli.max_width),
        ] {
            if value < 2 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"boards below 2x2 admit no square of size 2 or more",
                ));
            }
            if value > MAX_BOARD_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("dimension limit is {MAX_BOARD_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, SweepProcessor};
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let Ok(cli) = Cli::try_parse_from(["squarepack"]) else {
            unreachable!("bare invocation parses");
        };
        assert_eq!(cli.max_height, 20);
        assert_eq!(cli.max_width, 20);
        assert!(cli.sizes.is_none());
        assert!(cli.should_show_progress());
        assert!(cli.should_export_images());
    }

    #[test]
    fn test_size_list_parsing() {
        let Ok(cli) = Cli::try_parse_from(["squarepack", "--sizes", "3,2,5"]) else {
            unreachable!("size list parses");
        };
        assert_eq!(cli.sizes, Some(vec![3, 2, 5]));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let Ok(cli) = Cli::try_parse_from(["squarepack", "--max-height", "5000", "--quiet"]) else {
            unreachable!("flags parse");
        };
        assert!(SweepProcessor::new(cli).process().is_err());
    }
}
