//! Logo color analysis and derivative asset generation
//!
//! Loads a logo image, ranks its dominant non-background colors, and writes
//! transparent logo variants, a square icon, PNG favicons and a
//! multi-resolution ICO bundle.

#![forbid(unsafe_code)]

/// Color frequency counting, classification and palette summaries
pub mod color;
/// Transparency, geometry and icon encoding on RGBA images
pub mod imaging;
/// Input/output operations, configuration and error handling
pub mod io;
/// End-to-end workflows behind each subcommand
pub mod pipeline;

pub use io::error::{LogoError, Result};
