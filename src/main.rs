//! CLI entry point for expression-tree image synthesis

use clap::Parser;
use exprsynth::io::cli::{BatchProcessor, Cli};
use exprsynth::io::logging::init_logging;

fn main() -> exprsynth::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(|_| ())
}
