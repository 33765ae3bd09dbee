//! Color frequency analysis of a logo image

use crate::color::frequency::ColorFrequency;
use crate::color::palette::PaletteAnalysis;
use crate::io::error::Result;
use crate::io::image::load_image;
use std::path::Path;
use tracing::{debug, info};

/// Load a logo and summarize its most frequent non-background colors
///
/// # Errors
///
/// Returns an error if the image cannot be loaded
pub fn analyze_logo(path: &Path) -> Result<PaletteAnalysis> {
    let image = load_image(path)?.to_rgb8();
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "analyzing logo colors"
    );

    let frequency = ColorFrequency::from_image(&image);
    debug!(
        background = frequency.background_pixels(),
        colored = frequency.colored_pixels(),
        distinct = frequency.distinct_colors(),
        "counted colors"
    );

    Ok(PaletteAnalysis::from_frequency(&frequency))
}
