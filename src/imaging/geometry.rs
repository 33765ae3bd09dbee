//! Resizing, cropping and square padding

use crate::imaging::transparency::TRANSPARENT_WHITE;
use crate::io::error::{Result, invalid_parameter};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::borrow::Cow;

/// Resampling filter used for every resize
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize to exact dimensions, ignoring aspect ratio
pub fn resize_exact(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, RESAMPLE_FILTER)
}

/// Resize to a `size` x `size` square
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    resize_exact(image, size, size)
}

/// Dimensions after shrinking to fit inside `max` x `max`
///
/// Dimensions already within bounds are returned unchanged. Otherwise the
/// aspect ratio is kept and each side is truncated toward zero, never below 1.
pub fn fit_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let ratio = (f64::from(max) / f64::from(width)).min(f64::from(max) / f64::from(height));
    let scaled = |side: u32| ((f64::from(side) * ratio) as u32).max(1);
    (scaled(width), scaled(height))
}

/// Shrink so neither side exceeds `max`, borrowing the input when it already fits
pub fn downscale_to_fit(image: &RgbaImage, max: u32) -> Cow<'_, RgbaImage> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, max);
    if (new_width, new_height) == (width, height) {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(resize_exact(image, new_width, new_height))
    }
}

/// Keep the full width and the top `fraction` of the height
///
/// The kept height is truncated toward zero, so a single-row image yields
/// an empty `width` x 0 crop.
///
/// # Errors
///
/// Returns an error if `fraction` is outside `(0, 1]`
pub fn crop_top(image: &RgbaImage, fraction: f64) -> Result<RgbaImage> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(invalid_parameter(
            "crop fraction",
            &fraction,
            &"must lie in (0, 1]",
        ));
    }

    let (width, height) = image.dimensions();
    let kept = (f64::from(height) * fraction) as u32;

    Ok(imageops::crop_imm(image, 0, 0, width, kept).to_image())
}

/// Placement of a `width` x `height` image centered on a square canvas
///
/// Returns `(side, x, y)` where `side = max(width, height)` and the offsets
/// split the padding evenly, any odd pixel going after the image.
pub const fn square_placement(width: u32, height: u32) -> (u32, u32, u32) {
    let side = if width > height { width } else { height };
    (side, (side - width) / 2, (side - height) / 2)
}

/// Center the image on a transparent square canvas of side `max(width, height)`
///
/// Pixels are copied as-is, so partially transparent edges keep their alpha.
/// This differs from a masked paste, which would blend those edges toward the
/// white canvas and square their alpha.
pub fn pad_to_square(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let (side, x, y) = square_placement(width, height);
    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT_WHITE);
    imageops::replace(&mut canvas, image, i64::from(x), i64::from(y));
    canvas
}
