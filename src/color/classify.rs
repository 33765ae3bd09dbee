//! Channel-comparison color classification, hex and HSL conversion

use crate::io::configuration::{NEAR_WHITE_THRESHOLD, PURE_RED_MAX_OTHER, PURE_RED_MIN_RED};
use crate::io::error::{Result, invalid_parameter};
use serde::Serialize;
use std::fmt;

/// Whether every channel lies strictly above the near-white threshold
pub const fn is_near_white(rgb: [u8; 3]) -> bool {
    let [r, g, b] = rgb;
    r > NEAR_WHITE_THRESHOLD && g > NEAR_WHITE_THRESHOLD && b > NEAR_WHITE_THRESHOLD
}

/// Lowercase `#rrggbb` representation
pub fn to_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rrggbb` or `rrggbb`, case-insensitive
///
/// # Errors
///
/// Returns an error if the input is not exactly six hex digits after the
/// optional leading `#`
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_parameter(
            "hex",
            &hex,
            &"expected six hexadecimal digits",
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| invalid_parameter("hex", &hex, &"malformed channel"))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Hue, saturation and lightness in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub hue: u16,
    /// Saturation in percent, `0..=100`
    pub saturation: u8,
    /// Lightness in percent, `0..=100`
    pub lightness: u8,
}

impl Hsl {
    /// Convert RGB using the hexcone HLS model, truncating each component
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let lightness = sum / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Self {
                hue: 0,
                saturation: 0,
                lightness: (lightness * 100.0) as u8,
            };
        }

        let range = max - min;
        let saturation = if lightness <= 0.5 {
            range / sum
        } else {
            range / (2.0 - sum)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let sector = if (r - max).abs() < f64::EPSILON {
            bc - gc
        } else if (g - max).abs() < f64::EPSILON {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let hue = (sector / 6.0).rem_euclid(1.0);

        Self {
            hue: ((hue * 360.0) as u16).min(359),
            saturation: (saturation * 100.0) as u8,
            lightness: (lightness * 100.0) as u8,
        }
    }
}

/// Descriptive color family derived from channel dominance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorFamily {
    /// Red dominant, green above blue
    #[serde(rename = "Orange/Brown")]
    OrangeBrown,
    /// Red dominant, blue at or above green
    #[serde(rename = "Red/Pink")]
    RedPink,
    /// Blue dominant, red above green
    #[serde(rename = "Purple/Blue")]
    PurpleBlue,
    /// Blue dominant, green at or above red
    #[serde(rename = "Blue")]
    Blue,
    /// Green dominant
    #[serde(rename = "Green/Yellow")]
    GreenYellow,
    /// Red equals green, both above blue
    #[serde(rename = "Yellow")]
    Yellow,
    /// Red equals blue, both above green
    #[serde(rename = "Magenta")]
    Magenta,
    /// No dominant channel
    #[serde(rename = "Gray/Brown")]
    GrayBrown,
}

impl ColorFamily {
    /// Classify by comparing channels; the first matching rule wins
    pub const fn classify(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        if r > g && r > b {
            if g > b { Self::OrangeBrown } else { Self::RedPink }
        } else if b > r && b > g {
            if r > g { Self::PurpleBlue } else { Self::Blue }
        } else if g > r && g > b {
            Self::GreenYellow
        } else if r == g && r > b {
            Self::Yellow
        } else if r == b && r > g {
            Self::Magenta
        } else {
            Self::GrayBrown
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrangeBrown => "Orange/Brown",
            Self::RedPink => "Red/Pink",
            Self::PurpleBlue => "Purple/Blue",
            Self::Blue => "Blue",
            Self::GreenYellow => "Green/Yellow",
            Self::Yellow => "Yellow",
            Self::Magenta => "Magenta",
            Self::GrayBrown => "Gray/Brown",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Palette role bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Red-dominant colors, candidates for primary and accent use
    Warm,
    /// Blue-dominant colors, candidates for secondary use
    Cool,
    /// Everything else, candidates for text and backgrounds
    Neutral,
}

impl Tone {
    /// Bucket a color, or `None` for saturated reds that are left out
    pub const fn classify(rgb: [u8; 3]) -> Option<Self> {
        let [r, g, b] = rgb;
        if r > PURE_RED_MIN_RED && g < PURE_RED_MAX_OTHER && b < PURE_RED_MAX_OTHER {
            None
        } else if r > g && r > b {
            Some(Self::Warm)
        } else if b > r && b > g {
            Some(Self::Cool)
        } else {
            Some(Self::Neutral)
        }
    }
}
