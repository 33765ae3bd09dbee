//! Multi-resolution ICO bundle encoding

use crate::imaging::geometry::resize_square;
use crate::io::error::{LogoError, Result, invalid_parameter};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Largest edge length an ICO directory entry can describe
pub const MAX_ICO_SIZE: u32 = 256;

/// Encode square resizes of `image` as PNG frames of one ICO stream
///
/// Frames are written in the order of `sizes`.
///
/// # Errors
///
/// Returns an error if:
/// - `sizes` is empty or contains a size outside `1..=256`
/// - A frame cannot be PNG-encoded
/// - Writing to `writer` fails
pub fn encode_ico<W: Write>(image: &RgbaImage, sizes: &[u32], writer: W) -> Result<()> {
    if sizes.is_empty() {
        return Err(invalid_parameter(
            "ico sizes",
            &"[]",
            &"at least one size is required",
        ));
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if !(1..=MAX_ICO_SIZE).contains(&size) {
            return Err(invalid_parameter(
                "ico size",
                &size,
                &format!("must lie in 1..={MAX_ICO_SIZE}"),
            ));
        }
        let resized = resize_square(image, size);
        let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| LogoError::IconEncode { size, source: e })?;
        frames.push(frame);
    }

    IcoEncoder::new(writer)
        .encode_images(&frames)
        .map_err(|e| LogoError::IconEncode {
            size: sizes.iter().copied().max().unwrap_or_default(),
            source: e,
        })
}

/// Write a multi-resolution ICO file
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails
pub fn write_ico(image: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    encode_ico(image, sizes, &mut writer)?;
    writer.flush().map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
