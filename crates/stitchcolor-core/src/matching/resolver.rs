//! Nearest-swatch queries against a thread palette.
//!
//! Both queries are linear scans. Palettes are a few hundred swatches at
//! most, so there is no spatial index.

use serde::{Deserialize, Serialize};

use crate::color_space::Rgb;
use crate::distance::{DistanceAlgorithm, color_distance};

/// Number of candidates [`find_closest_colors`] callers ask for by default.
pub const DEFAULT_MATCH_COUNT: usize = 5;

/// One swatch in a thread library palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Stable reference, e.g. `"DMC-310"`.
    pub id: String,
    pub rgb: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteEntry {
    pub fn new(id: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            id: id.into(),
            rgb,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A palette swatch paired with its distance from the query color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMatch {
    /// The swatch color (not the query color).
    pub rgb: Rgb,
    pub color_id: String,
    /// Distance in the units of the algorithm that produced it.
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColorMatch {
    fn from_entry(entry: &PaletteEntry, distance: f64) -> Self {
        Self {
            rgb: entry.rgb,
            color_id: entry.id.clone(),
            distance,
            name: entry.name.clone(),
        }
    }
}

/// Find the palette entry closest to `target`.
///
/// Returns `None` only for an empty palette. On an exact distance tie the
/// entry that appears first in `palette` wins.
pub fn find_closest_color(
    target: Rgb,
    palette: &[PaletteEntry],
    algorithm: DistanceAlgorithm,
) -> Option<ColorMatch> {
    let mut best: Option<(&PaletteEntry, f64)> = None;

    for entry in palette {
        let distance = color_distance(target, entry.rgb, algorithm);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entry, distance)),
        }
    }

    best.map(|(entry, distance)| ColorMatch::from_entry(entry, distance))
}

/// The `count` palette entries closest to `target`, nearest first.
///
/// Entries at equal distance keep their palette order. Returns fewer than
/// `count` results when the palette is smaller than that.
pub fn find_closest_colors(
    target: Rgb,
    palette: &[PaletteEntry],
    count: usize,
    algorithm: DistanceAlgorithm,
) -> Vec<ColorMatch> {
    let mut scored: Vec<(&PaletteEntry, f64)> = palette
        .iter()
        .map(|entry| (entry, color_distance(target, entry.rgb, algorithm)))
        .collect();

    // sort_by is stable, which is what keeps ties in palette order.
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.truncate(count);

    scored
        .into_iter()
        .map(|(entry, distance)| ColorMatch::from_entry(entry, distance))
        .collect()
}
