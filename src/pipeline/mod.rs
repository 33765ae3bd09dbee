//! End-to-end asset workflows, one per subcommand

/// Color frequency analysis of a logo
pub mod analyze;
/// Fixed-size navigation icon generation
pub mod nav_icon;
/// Transparent logo, square icon and favicon set generation
pub mod optimize;
