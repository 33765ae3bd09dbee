//! Command-line interface for logo analysis and asset generation

use crate::io::configuration::{
    DEFAULT_ASSET_NAME, DEFAULT_LOGO_PATH, DEFAULT_NAV_ICON_OUTPUT, DEFAULT_NAV_ICON_SOURCE,
    DEFAULT_OUTPUT_DIR,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::{
    ReportFormat, emit, format_nav_icon_summary, format_optimize_summary, render,
};
use crate::pipeline::analyze::analyze_logo;
use crate::pipeline::nav_icon::create_nav_icon;
use crate::pipeline::optimize::optimize_logo;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logokit")]
#[command(
    author,
    version,
    about = "Analyze logo colors and generate transparent logo, icon and favicon assets"
)]
/// Command-line arguments for the logo toolkit
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress bars and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log pipeline steps (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations; every path has a default so each runs without arguments
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report the dominant non-background colors of a logo
    Analyze {
        /// Logo image to analyze
        #[arg(short, long, default_value = DEFAULT_LOGO_PATH)]
        input: PathBuf,

        /// Emit the analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Resize an icon to the 128x128 navigation size
    NavIcon {
        /// Source icon image
        #[arg(short, long, default_value = DEFAULT_NAV_ICON_SOURCE)]
        input: PathBuf,

        /// Destination PNG
        #[arg(short, long, default_value = DEFAULT_NAV_ICON_OUTPUT)]
        output: PathBuf,
    },

    /// Write transparent logo variants, a square icon and the favicon set
    Optimize {
        /// Source logo image
        #[arg(short, long, default_value = DEFAULT_LOGO_PATH)]
        input: PathBuf,

        /// Directory receiving favicons; logo variants go to its `logos/` subdirectory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// File name prefix for logo variants
        #[arg(short, long, default_value = DEFAULT_ASSET_NAME)]
        name: String,
    },
}

impl Cli {
    /// Check if progress and status lines should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the selected subcommand and writes its output
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the subcommand, writing reports to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails
    pub fn run(&self) -> Result<()> {
        self.run_with(std::io::stdout().lock())
    }

    /// Run the subcommand, writing reports and status lines to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if loading, processing, saving or writing output fails
    pub fn run_with<W: Write>(&self, mut out: W) -> Result<()> {
        match &self.cli.command {
            Command::Analyze { input, json } => {
                let analysis = analyze_logo(input)?;
                let format = if *json {
                    ReportFormat::Json
                } else {
                    ReportFormat::Text
                };
                emit(&render(&analysis, format)?, &mut out)
            }
            Command::NavIcon { input, output } => {
                let summary = create_nav_icon(input, output)?;
                if self.cli.should_show_progress() {
                    emit(&format_nav_icon_summary(&summary), &mut out)?;
                }
                Ok(())
            }
            Command::Optimize {
                input,
                output_dir,
                name,
            } => {
                let summary =
                    optimize_logo(input, output_dir, name, self.progress_manager.as_ref())?;
                if self.cli.should_show_progress() {
                    emit(&format_optimize_summary(&summary), &mut out)?;
                }
                Ok(())
            }
        }
    }
}
