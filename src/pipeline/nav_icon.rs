//! Fixed-size navigation icon generation

use crate::imaging::geometry::resize_square;
use crate::io::configuration::NAV_ICON_SIZE;
use crate::io::error::Result;
use crate::io::image::{file_size_kb, load_image, save_png};
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a navigation icon run
#[derive(Debug, Clone, PartialEq)]
pub struct NavIconSummary {
    /// Written icon
    pub output: PathBuf,
    /// Source dimensions
    pub original_dimensions: (u32, u32),
    /// Output edge length
    pub size: u32,
    /// Source file size in KB
    pub original_kb: f64,
    /// Output file size in KB
    pub new_kb: f64,
}

impl NavIconSummary {
    /// Size reduction in percent; negative when the output grew
    pub fn reduction_percent(&self) -> f64 {
        if self.original_kb > 0.0 {
            (self.original_kb - self.new_kb) / self.original_kb * 100.0
        } else {
            0.0
        }
    }
}

/// Resize an icon to the navigation size and save it as PNG
///
/// Source dimensions and aspect ratio are not checked.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or the output cannot be written
pub fn create_nav_icon(source: &Path, output: &Path) -> Result<NavIconSummary> {
    create_sized_icon(source, output, NAV_ICON_SIZE)
}

/// Resize an icon to a `size` x `size` square and save it as PNG
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or the output cannot be written
pub fn create_sized_icon(source: &Path, output: &Path, size: u32) -> Result<NavIconSummary> {
    let icon = load_image(source)?.to_rgba8();
    let original_dimensions = icon.dimensions();
    info!(
        path = %source.display(),
        width = original_dimensions.0,
        height = original_dimensions.1,
        "loaded icon"
    );

    let resized = resize_square(&icon, size);
    save_png(&resized, output)?;

    let summary = NavIconSummary {
        output: output.to_path_buf(),
        original_dimensions,
        size,
        original_kb: file_size_kb(source)?,
        new_kb: file_size_kb(output)?,
    };
    info!(
        path = %output.display(),
        size,
        reduction = summary.reduction_percent(),
        "created navigation icon"
    );
    Ok(summary)
}
