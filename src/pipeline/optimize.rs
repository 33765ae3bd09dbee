//! Transparent logo, square icon and favicon set generation

use crate::imaging::geometry::{crop_top, downscale_to_fit, pad_to_square, resize_square};
use crate::imaging::icon::write_ico;
use crate::imaging::transparency::to_transparent;
use crate::io::configuration::{
    APPLE_TOUCH_ICON_NAME, APPLE_TOUCH_ICON_SIZE, FAVICON_ICO_NAME, FAVICON_SIZES,
    ICO_SIZES, ICON_CROP_FRACTION, ICON_SUFFIX, LOGOS_SUBDIR, MAX_LOGO_DIMENSION,
    OPTIMIZED_SUFFIX, TRANSPARENT_SUFFIX, favicon_file_name,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{ensure_dir, load_image, save_png};
use crate::io::progress::ProgressManager;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of files a complete run writes
pub const OUTPUT_FILE_COUNT: usize = 3 + FAVICON_SIZES.len() + 2;

/// Paths and dimensions of everything an optimizer run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeSummary {
    /// Source image dimensions
    pub source_dimensions: (u32, u32),
    /// Pixels turned transparent as near-white background
    pub cleared_pixels: usize,
    /// Full-size logo with transparent background
    pub transparent_logo: PathBuf,
    /// Size-capped logo
    pub optimized_logo: PathBuf,
    /// Dimensions of the size-capped logo
    pub optimized_dimensions: (u32, u32),
    /// Square icon cropped from the top of the logo
    pub icon: PathBuf,
    /// Edge length of the square icon
    pub icon_size: u32,
    /// Square PNG favicons, in [`FAVICON_SIZES`] order
    pub favicons: Vec<PathBuf>,
    /// Apple touch icon
    pub apple_touch_icon: PathBuf,
    /// Multi-resolution ICO bundle
    pub favicon_ico: PathBuf,
}

impl OptimizeSummary {
    /// Every written file in creation order
    pub fn files(&self) -> Vec<&Path> {
        let mut files = vec![
            self.transparent_logo.as_path(),
            self.optimized_logo.as_path(),
            self.icon.as_path(),
        ];
        files.extend(self.favicons.iter().map(PathBuf::as_path));
        files.push(self.apple_touch_icon.as_path());
        files.push(self.favicon_ico.as_path());
        files
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid_parameter(
            "name",
            &name,
            &"must be a non-empty file name prefix without path separators",
        ));
    }
    Ok(())
}

fn record(progress: Option<&ProgressManager>, path: &Path) {
    if let Some(pm) = progress {
        pm.complete_step(path);
    }
}

fn save_step(image: &RgbaImage, path: &Path, progress: Option<&ProgressManager>) -> Result<()> {
    save_png(image, path)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "saved");
    record(progress, path);
    Ok(())
}

/// Load a logo and write its transparent, size-capped, icon and favicon variants
///
/// Logo variants go to `<output_dir>/logos/`, favicons to `<output_dir>/`.
/// Any failure aborts the remaining steps.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded, `name` is not a plain
/// file name prefix, or any output cannot be written
pub fn optimize_logo(
    input: &Path,
    output_dir: &Path,
    name: &str,
    progress: Option<&ProgressManager>,
) -> Result<OptimizeSummary> {
    let image = load_image(input)?;
    info!(
        path = %input.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "loaded logo"
    );
    optimize_image(&image, output_dir, name, progress)
}

/// Write all derivative assets of an already decoded logo
///
/// # Errors
///
/// Returns an error if `name` is not a plain file name prefix, the image is
/// too short to crop an icon from, or any output cannot be written
pub fn optimize_image(
    image: &DynamicImage,
    output_dir: &Path,
    name: &str,
    progress: Option<&ProgressManager>,
) -> Result<OptimizeSummary> {
    validate_name(name)?;
    let logos_dir = output_dir.join(LOGOS_SUBDIR);
    ensure_dir(&logos_dir)?;

    if let Some(pm) = progress {
        pm.initialize(OUTPUT_FILE_COUNT);
    }

    let (transparent, cleared_pixels) = to_transparent(image);
    info!(cleared = cleared_pixels, "applied transparency");
    let transparent_logo = logos_dir.join(format!("{name}{TRANSPARENT_SUFFIX}"));
    save_step(&transparent, &transparent_logo, progress)?;

    let optimized = downscale_to_fit(&transparent, MAX_LOGO_DIMENSION);
    let optimized_logo = logos_dir.join(format!("{name}{OPTIMIZED_SUFFIX}"));
    save_step(&optimized, &optimized_logo, progress)?;
    let optimized_dimensions = optimized.dimensions();

    let cropped = crop_top(&transparent, ICON_CROP_FRACTION)?;
    let square = pad_to_square(&cropped);
    let icon = logos_dir.join(format!("{name}{ICON_SUFFIX}"));
    save_step(&square, &icon, progress)?;

    let mut favicons = Vec::with_capacity(FAVICON_SIZES.len());
    for size in FAVICON_SIZES {
        let path = output_dir.join(favicon_file_name(size));
        save_step(&resize_square(&square, size), &path, progress)?;
        favicons.push(path);
    }

    let apple_touch_icon = output_dir.join(APPLE_TOUCH_ICON_NAME);
    save_step(
        &resize_square(&square, APPLE_TOUCH_ICON_SIZE),
        &apple_touch_icon,
        progress,
    )?;

    let favicon_ico = output_dir.join(FAVICON_ICO_NAME);
    write_ico(&square, &ICO_SIZES, &favicon_ico)?;
    record(progress, &favicon_ico);

    if let Some(pm) = progress {
        pm.finish();
    }
    info!(dir = %output_dir.display(), "logo optimization complete");

    Ok(OptimizeSummary {
        source_dimensions: (image.width(), image.height()),
        cleared_pixels,
        transparent_logo,
        optimized_logo,
        optimized_dimensions,
        icon,
        icon_size: square.width(),
        favicons,
        apple_touch_icon,
        favicon_ico,
    })
}
