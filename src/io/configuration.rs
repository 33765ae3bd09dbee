//! Processing constants and default paths

// Background detection
/// Per-channel cutoff above which a pixel counts as near-white background
///
/// A channel value of exactly 240 is kept; 241 and above is background.
pub const NEAR_WHITE_THRESHOLD: u8 = 240;

// Color analysis
/// Number of most frequent colors listed in the palette report
pub const TOP_COLOR_COUNT: usize = 20;
/// Maximum entries listed per tone bucket
pub const TONE_SAMPLE_LIMIT: usize = 5;
/// Red channel floor for colors treated as pure red and left out of tone buckets
pub const PURE_RED_MIN_RED: u8 = 200;
/// Green and blue ceiling for colors treated as pure red
pub const PURE_RED_MAX_OTHER: u8 = 150;

// Navigation icon
/// Edge length of the square navigation icon
pub const NAV_ICON_SIZE: u32 = 128;

// Logo optimization
/// Largest width or height of the optimized logo variant
pub const MAX_LOGO_DIMENSION: u32 = 512;

/// Share of the logo height, measured from the top, that holds the symbol
///
/// Hardcoded heuristic for logos with the symbol stacked above the wordmark.
/// It is not derived from image content.
pub const ICON_CROP_FRACTION: f64 = 0.6;

/// Square favicon sizes written as individual PNG files
pub const FAVICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
/// Edge length of the Apple touch icon
pub const APPLE_TOUCH_ICON_SIZE: u32 = 180;
/// Sizes embedded in the multi-resolution ICO bundle
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

// Default locations, used when no path is given on the command line
/// Default source logo for `analyze` and `optimize`
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";
/// Default output directory for `optimize`
pub const DEFAULT_OUTPUT_DIR: &str = "public";
/// Default source for `nav-icon` (the square icon written by `optimize`)
pub const DEFAULT_NAV_ICON_SOURCE: &str = "public/logos/logo-icon.png";
/// Default destination for `nav-icon`
pub const DEFAULT_NAV_ICON_OUTPUT: &str = "public/logos/logo-nav-icon.png";
/// Default file name prefix for generated logo assets
pub const DEFAULT_ASSET_NAME: &str = "logo";

// Output layout
/// Subdirectory of the output directory holding logo variants
pub const LOGOS_SUBDIR: &str = "logos";
/// Suffix of the full logo with transparent background
pub const TRANSPARENT_SUFFIX: &str = "-logo-transparent.png";
/// Suffix of the size-capped logo
pub const OPTIMIZED_SUFFIX: &str = "-new-logo.png";
/// Suffix of the square icon cropped from the logo
pub const ICON_SUFFIX: &str = "-icon.png";
/// File name of the Apple touch icon
pub const APPLE_TOUCH_ICON_NAME: &str = "apple-touch-icon.png";
/// File name of the multi-resolution icon bundle
pub const FAVICON_ICO_NAME: &str = "favicon.ico";

/// File name of a square PNG favicon of the given size
pub fn favicon_file_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "info";
