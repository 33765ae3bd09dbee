//! Text and JSON rendering of palette reports and run summaries

use crate::color::palette::{PaletteAnalysis, RankedColor};
use crate::io::configuration::{APPLE_TOUCH_ICON_SIZE, FAVICON_SIZES};
use crate::io::error::{Result, report_error};
use crate::pipeline::nav_icon::NavIconSummary;
use crate::pipeline::optimize::OptimizeSummary;
use std::fmt::{self, Write as _};
use std::io::Write;

const RULE_WIDTH: usize = 80;

/// Fixed palette recommendation printed after the measured colors
pub const SUGGESTED_PALETTE: &str = "
Based on the logo analysis, here's a modern color schema:

🎨 PRIMARY COLORS (Buttons, CTAs):
  - Primary:   #1F4788 (Deep Navy Blue) - Professional, trustworthy
  - Hover:     #163862 (Darker Navy) - Interactive state
  - Active:    #0F2745 (Very Dark Navy) - Pressed state

🔶 ACCENT COLORS (Highlights, Links):
  - Accent 1:  #D4A574 (Warm Gold/Tan) - Sophisticated, warm
  - Accent 2:  #C17D4F (Copper/Bronze) - Earthy, grounded
  - Accent 3:  #E6B887 (Light Gold) - Subtle highlights

⚡ ACTION COLORS (Success, Warning, Danger):
  - Success:   #4A9B6B (Muted Green)
  - Warning:   #D4A574 (Gold - from accent)
  - Danger:    #C14F4F (Muted Red)
  - Info:      #1F4788 (Navy - from primary)

🌓 NEUTRAL PALETTE (Backgrounds, Text):
  - Text Dark:     #0F0F0F (Almost Black)
  - Text Medium:   #4A4A4A (Medium Gray)
  - Text Light:    #8A8A8A (Light Gray)
  - BG Dark:       #0E0E0E (Very Dark Gray)
  - BG Medium:     #1A1919 (Dark Gray)
  - BG Light:      #F5F5F5 (Off-White)
  - Border:        #2A2A2A (Subtle Border)

📝 LINK COLORS:
  - Default:   #D4A574 (Gold) - Visible but not harsh
  - Hover:     #E6B887 (Light Gold) - Brighter on hover
  - Active:    #C17D4F (Copper) - Clicked state
  - Visited:   #B89968 (Darker Gold) - Already clicked

💡 USAGE RECOMMENDATIONS:
  ✓ Use Navy Blue (#1F4788) for primary buttons (professional, trustworthy)
  ✓ Use Gold/Tan (#D4A574) for links and secondary actions (warm, inviting)
  ✓ Avoid the saturated logo rust (#D97757) as primary - too warm/aggressive
  ✓ Use rust colors sparingly for accents and highlights only
  ✓ Ensure WCAG AAA contrast (7:1) for text on backgrounds
  ✓ Use subtle transitions (200ms) for hover states
";

/// Output flavor of the palette report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text with the suggested palette appended
    #[default]
    Text,
    /// Pretty-printed JSON of the measured analysis only
    Json,
}

/// One ranked color as a fixed-width report line
pub fn format_ranked_line(color: &RankedColor) -> String {
    let [r, g, b] = color.rgb;
    format!(
        "{:2}. {} | RGB({r:3}, {g:3}, {b:3}) | HSL({:3}°, {:3}%, {:3}%) | {:15} | Count: {:6}",
        color.rank,
        color.hex,
        color.hsl.hue,
        color.hsl.saturation,
        color.hsl.lightness,
        color.family,
        color.count,
    )
}

fn write_rule(out: &mut String, ch: char) -> fmt::Result {
    writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
}

fn write_heading(out: &mut String, title: &str) -> fmt::Result {
    write_rule(out, '=')?;
    writeln!(out, "{title}")?;
    write_rule(out, '=')
}

fn write_tone_section(out: &mut String, title: &str, colors: &[RankedColor]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    write_rule(out, '-')?;
    for color in colors {
        let [r, g, b] = color.rgb;
        writeln!(
            out,
            "  {} - RGB({r}, {g}, {b}) - Usage: {} pixels",
            color.hex, color.count
        )?;
    }
    Ok(())
}

fn write_text(analysis: &PaletteAnalysis, out: &mut String) -> fmt::Result {
    write_heading(out, "LOGO COLOR ANALYSIS")?;
    writeln!(
        out,
        "\nAnalyzed {} pixels: {} near-white background skipped, {} distinct colors",
        analysis.total_pixels, analysis.background_pixels, analysis.distinct_colors
    )?;
    writeln!(out, "\nTop {} Colors in Logo:", analysis.top_colors.len())?;
    write_rule(out, '-')?;
    for color in &analysis.top_colors {
        writeln!(out, "{}", format_ranked_line(color))?;
    }

    writeln!(out)?;
    write_heading(out, "RECOMMENDED COLOR SCHEMA FOR MODERN UI/UX")?;
    write_tone_section(out, "🔥 WARM TONES (Primary/Accent):", &analysis.tones.warm)?;
    write_tone_section(out, "❄️  COOL TONES (Secondary/Trust):", &analysis.tones.cool)?;
    write_tone_section(
        out,
        "⚪ NEUTRAL TONES (Text/Backgrounds):",
        &analysis.tones.neutral,
    )?;

    writeln!(out)?;
    write_heading(out, "SUGGESTED MODERN UI/UX COLOR PALETTE")?;
    writeln!(out, "{SUGGESTED_PALETTE}")?;
    write_rule(out, '=')
}

/// Render the full text report
///
/// # Errors
///
/// Returns an error if formatting fails
pub fn render_text(analysis: &PaletteAnalysis) -> Result<String> {
    let mut out = String::new();
    write_text(analysis, &mut out).map_err(|e| report_error("text report", &e))?;
    Ok(out)
}

/// Render the measured analysis as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_json(analysis: &PaletteAnalysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).map_err(|e| report_error("JSON report", &e))
}

/// Render in the requested format
///
/// # Errors
///
/// Returns an error if rendering fails
pub fn render(analysis: &PaletteAnalysis, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => render_text(analysis),
        ReportFormat::Json => render_json(analysis),
    }
}

/// Write a rendered report followed by a newline
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn emit<W: Write>(report: &str, mut out: W) -> Result<()> {
    writeln!(out, "{report}")
        .and_then(|()| out.flush())
        .map_err(|e| report_error("report output", &e))
}

/// Status lines for a finished navigation icon run
pub fn format_nav_icon_summary(summary: &NavIconSummary) -> String {
    let (width, height) = summary.original_dimensions;
    format!(
        "✓ Created navigation icon: {}\n  Original: {width}x{height}px, {:.1}KB\n  New size: {:.1}KB\n  Size: {size}x{size}px\n  Reduction: {:.1}%",
        summary.output.display(),
        summary.original_kb,
        summary.new_kb,
        summary.reduction_percent(),
        size = summary.size,
    )
}

/// Generated-file listing for a finished optimizer run
pub fn format_optimize_summary(summary: &OptimizeSummary) -> String {
    let (width, height) = summary.source_dimensions;
    let (opt_width, opt_height) = summary.optimized_dimensions;
    let favicon_sizes = FAVICON_SIZES
        .iter()
        .map(|size| format!("{size}x{size}"))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        "✅ Logo optimization complete!".to_string(),
        format!(
            "  Source: {width}x{height}px, {} near-white pixels made transparent",
            summary.cleared_pixels
        ),
        String::new(),
        "Generated files:".to_string(),
        format!(
            "  - Logo with transparency: {}",
            summary.transparent_logo.display()
        ),
        format!(
            "  - Optimized logo: {} ({opt_width}x{opt_height})",
            summary.optimized_logo.display()
        ),
        format!(
            "  - Logo icon: {} ({size}x{size})",
            summary.icon.display(),
            size = summary.icon_size
        ),
        format!("  - Favicon sizes: {favicon_sizes}"),
        format!(
            "  - Apple touch icon: {} ({APPLE_TOUCH_ICON_SIZE}x{APPLE_TOUCH_ICON_SIZE})",
            summary.apple_touch_icon.display()
        ),
        format!(
            "  - favicon.ico: {} (multi-size ICO file)",
            summary.favicon_ico.display()
        ),
    ];
    lines.join("\n")
}
