//! Stitchcolor Core — color matching and palette reduction for stitch patterns.
//!
//! This crate contains the color science behind the pattern designer:
//! sRGB/XYZ/LAB conversion, perceptual distance metrics up to CIEDE2000,
//! nearest-thread resolution, k-means++ palette reduction, and a hue
//! harmony score. Pure computation; no I/O and no framework dependencies.

pub mod color_space;
pub mod distance;
pub mod error;
pub mod harmony;
pub mod matching;
pub mod reduction;

// Re-exports for convenience.
pub use color_space::{Lab, Rgb, Xyz, lab_to_rgb, rgb_to_lab};
pub use distance::{Cie94Mode, DistanceAlgorithm, color_distance};
pub use error::{ColorError, Result};
pub use harmony::calculate_color_harmony;
pub use matching::{
    ColorMatch, DifferenceCategory, PaletteEntry, ThreadBrand, ThreadColor, ThreadMatchSet,
    color_difference_category, find_closest_color, find_closest_colors, match_colors_to_threads,
};
pub use reduction::{KMeansConfig, reduce_color_palette, reduce_color_palette_with};
