//! Command-line interface, configuration, error handling and file output

/// Command-line argument parsing and subcommand dispatch
pub mod cli;
/// Processing constants and default paths
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Step progress display for multi-asset generation
pub mod progress;
/// Palette report and run summary rendering
pub mod report;
