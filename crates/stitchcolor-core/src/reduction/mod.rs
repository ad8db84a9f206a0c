//! Palette reduction — clustering image colors down to a working palette.

pub mod kmeans;

pub use kmeans::{KMeansConfig, reduce_color_palette, reduce_color_palette_with};
