//! Near-white background removal via alpha channel

use crate::color::classify::is_near_white;
use image::{DynamicImage, Rgba, RgbaImage};

/// Value written over every background pixel
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Convert to RGBA and clear near-white background
///
/// Returns the new image and the number of pixels made transparent.
pub fn to_transparent(image: &DynamicImage) -> (RgbaImage, usize) {
    let mut rgba = image.to_rgba8();
    let cleared = clear_background(&mut rgba);
    (rgba, cleared)
}

/// Make every pixel with all color channels above the near-white threshold fully transparent
///
/// The existing alpha value is ignored for the test; other pixels are left
/// untouched. Returns the number of pixels changed.
pub fn clear_background(image: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if is_near_white([r, g, b]) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }
    cleared
}
