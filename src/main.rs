//! CLI entry point for logo color analysis and asset generation

use clap::Parser;
use logokit::io::cli::{Cli, CommandRunner};
use logokit::io::logging;

fn main() -> logokit::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let runner = CommandRunner::new(cli);
    runner.run()
}
