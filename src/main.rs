//! CLI entry point for the square packing sweep

use clap::Parser;
use squarepack::io::cli::{Cli, SweepProcessor};

fn main() -> squarepack::Result<()> {
    let cli = Cli::parse();
    let processor = SweepProcessor::new(cli);
    processor.process()
}
