//! Pixel-level transformations for derivative logo assets

/// Resizing, cropping and square padding
pub mod geometry;
/// Multi-resolution ICO bundle encoding
pub mod icon;
/// Near-white background removal
pub mod transparency;
