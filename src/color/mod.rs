//! Color frequency analysis and classification

/// Channel-comparison classification, hex and HSL conversion
pub mod classify;
/// Exact-color occurrence counting with background filtering
pub mod frequency;
/// Ranked palette summary and tone grouping
pub mod palette;
