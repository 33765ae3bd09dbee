//! Image loading and compressed PNG export

use crate::io::error::{LogoError, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Open and decode an image in any format the `image` crate supports
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| LogoError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create a directory and all missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

/// Save an RGBA image as PNG with maximum compression
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - PNG encoding fails
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let file = File::create(path).map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        PngFilter::Adaptive,
    );

    image
        .write_with_encoder(encoder)
        .map_err(|e| LogoError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Size of a file in kilobytes (1 KB = 1024 bytes)
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read
pub fn file_size_kb(path: &Path) -> Result<f64> {
    let metadata = std::fs::metadata(path).map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "read metadata",
        source: e,
    })?;
    Ok(metadata.len() as f64 / 1024.0)
}
