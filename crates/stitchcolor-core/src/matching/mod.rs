//! Nearest-match resolution — swatch queries, ΔE bands, and thread catalogs.

pub mod category;
pub mod resolver;
pub mod threads;

pub use category::{DifferenceCategory, color_difference_category};
pub use resolver::{
    ColorMatch, DEFAULT_MATCH_COUNT, PaletteEntry, find_closest_color, find_closest_colors,
};
pub use threads::{
    MatchedThread, ThreadBrand, ThreadColor, ThreadMatchSet, match_colors_to_threads,
    thread_palette,
};
