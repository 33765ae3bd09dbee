//! Exact-color frequency counting with background filtering

use crate::color::classify::is_near_white;
use image::RgbImage;
use serde::Serialize;
use std::collections::HashMap;

/// A distinct color and the number of pixels carrying it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    /// RGB channels
    pub color: [u8; 3],
    /// Number of occurrences
    pub count: usize,
}

/// Occurrence table of non-background colors, ranked by frequency
///
/// Ties keep the order in which colors were first seen, scanning pixels
/// row by row.
#[derive(Debug, Clone, Default)]
pub struct ColorFrequency {
    ranked: Vec<ColorCount>,
    total_pixels: usize,
    background_pixels: usize,
}

impl ColorFrequency {
    /// Count colors of an RGB image, skipping near-white background
    pub fn from_image(image: &RgbImage) -> Self {
        Self::from_pixels(image.pixels().map(|p| p.0))
    }

    /// Count colors from a row-major pixel sequence, skipping near-white background
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = [u8; 3]>,
    {
        // color -> (count, first seen position)
        let mut table: HashMap<[u8; 3], (usize, usize)> = HashMap::new();
        let mut total_pixels = 0;
        let mut background_pixels = 0;

        for (position, color) in pixels.into_iter().enumerate() {
            total_pixels += 1;
            if is_near_white(color) {
                background_pixels += 1;
                continue;
            }
            table.entry(color).or_insert((0, position)).0 += 1;
        }

        let mut entries: Vec<([u8; 3], usize, usize)> = table
            .into_iter()
            .map(|(color, (count, first))| (color, count, first))
            .collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let ranked = entries
            .into_iter()
            .map(|(color, count, _)| ColorCount { color, count })
            .collect();

        Self {
            ranked,
            total_pixels,
            background_pixels,
        }
    }

    /// All distinct colors, most frequent first
    pub fn ranked(&self) -> &[ColorCount] {
        &self.ranked
    }

    /// At most `n` of the most frequent colors
    pub fn top(&self, n: usize) -> &[ColorCount] {
        self.ranked.get(..n.min(self.ranked.len())).unwrap_or(&[])
    }

    /// Most frequent color, if any non-background pixel exists
    pub fn most_common(&self) -> Option<ColorCount> {
        self.ranked.first().copied()
    }

    /// Number of pixels examined
    pub const fn total_pixels(&self) -> usize {
        self.total_pixels
    }

    /// Number of pixels dropped as near-white background
    pub const fn background_pixels(&self) -> usize {
        self.background_pixels
    }

    /// Number of pixels that survived background filtering
    pub const fn colored_pixels(&self) -> usize {
        self.total_pixels - self.background_pixels
    }

    /// Number of distinct non-background colors
    pub fn distinct_colors(&self) -> usize {
        self.ranked.len()
    }
}
