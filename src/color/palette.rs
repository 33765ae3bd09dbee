//! Ranked palette summary built from a color frequency table

use crate::color::classify::{ColorFamily, Hsl, Tone, to_hex};
use crate::color::frequency::{ColorCount, ColorFrequency};
use crate::io::configuration::{TONE_SAMPLE_LIMIT, TOP_COLOR_COUNT};
use serde::Serialize;

/// One of the most frequent colors with its derived descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedColor {
    /// 1-based position in the frequency ranking
    pub rank: usize,
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// RGB channels
    pub rgb: [u8; 3],
    /// Truncated HSL approximation
    pub hsl: Hsl,
    /// Channel-dominance family
    pub family: ColorFamily,
    /// Number of pixels with exactly this color
    pub count: usize,
}

impl RankedColor {
    fn new(rank: usize, entry: ColorCount) -> Self {
        Self {
            rank,
            hex: to_hex(entry.color).to_uppercase(),
            rgb: entry.color,
            hsl: Hsl::from_rgb(entry.color),
            family: ColorFamily::classify(entry.color),
            count: entry.count,
        }
    }
}

/// Colors of the ranking grouped by palette role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToneBuckets {
    /// Red-dominant colors
    pub warm: Vec<RankedColor>,
    /// Blue-dominant colors
    pub cool: Vec<RankedColor>,
    /// Remaining colors
    pub neutral: Vec<RankedColor>,
}

impl ToneBuckets {
    /// Sort ranked colors into buckets, keeping rank order and at most `limit` per bucket
    ///
    /// Saturated reds are left out of every bucket.
    pub fn from_ranked(colors: &[RankedColor], limit: usize) -> Self {
        let mut buckets = Self::default();
        for color in colors {
            let bucket = match Tone::classify(color.rgb) {
                Some(Tone::Warm) => &mut buckets.warm,
                Some(Tone::Cool) => &mut buckets.cool,
                Some(Tone::Neutral) => &mut buckets.neutral,
                None => continue,
            };
            if bucket.len() < limit {
                bucket.push(color.clone());
            }
        }
        buckets
    }
}

/// Everything the palette report shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteAnalysis {
    /// Pixels examined
    pub total_pixels: usize,
    /// Pixels skipped as near-white background
    pub background_pixels: usize,
    /// Distinct non-background colors
    pub distinct_colors: usize,
    /// Most frequent colors, most common first
    pub top_colors: Vec<RankedColor>,
    /// Top colors grouped by tone
    pub tones: ToneBuckets,
}

impl PaletteAnalysis {
    /// Summarize the most frequent colors of a frequency table
    pub fn from_frequency(frequency: &ColorFrequency) -> Self {
        Self::with_limits(frequency, TOP_COLOR_COUNT, TONE_SAMPLE_LIMIT)
    }

    /// Summarize with explicit ranking and per-bucket limits
    pub fn with_limits(frequency: &ColorFrequency, top: usize, per_tone: usize) -> Self {
        let top_colors: Vec<RankedColor> = frequency
            .top(top)
            .iter()
            .enumerate()
            .map(|(index, &entry)| RankedColor::new(index + 1, entry))
            .collect();
        let tones = ToneBuckets::from_ranked(&top_colors, per_tone);

        Self {
            total_pixels: frequency.total_pixels(),
            background_pixels: frequency.background_pixels(),
            distinct_colors: frequency.distinct_colors(),
            top_colors,
            tones,
        }
    }
}
