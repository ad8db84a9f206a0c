//! Thread catalog records and palette-to-catalog resolution.
//!
//! The image import path reduces a picture to a handful of colors and then
//! snaps each one to a real thread. Several reduced colors often land on the
//! same thread; [`match_colors_to_threads`] collapses those so the pattern
//! key lists every thread once.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::resolver::{PaletteEntry, find_closest_color};
use crate::color_space::Rgb;
use crate::distance::DistanceAlgorithm;
use crate::error::ColorError;

/// Supported thread manufacturers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadBrand {
    #[serde(rename = "DMC")]
    Dmc,
    Anchor,
    Kreinik,
}

impl ThreadBrand {
    pub const ALL: [Self; 3] = [Self::Dmc, Self::Anchor, Self::Kreinik];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dmc => "DMC",
            Self::Anchor => "Anchor",
            Self::Kreinik => "Kreinik",
        }
    }
}

impl fmt::Display for ThreadBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreadBrand {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|brand| brand.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownThreadBrand(name.to_string()))
    }
}

/// A single thread from a manufacturer's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadColor {
    /// Manufacturer code, e.g. `"310"`.
    pub code: String,
    pub name: String,
    pub rgb: Rgb,
    pub brand: ThreadBrand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ThreadColor {
    /// Palette reference for this thread: `"{brand}-{code}"`.
    pub fn palette_id(&self) -> String {
        format!("{}-{}", self.brand, self.code)
    }

    pub fn to_palette_entry(&self) -> PaletteEntry {
        PaletteEntry::new(self.palette_id(), self.rgb).with_name(self.name.clone())
    }
}

/// Build a matchable palette from catalog records, preserving order.
pub fn thread_palette(threads: &[ThreadColor]) -> Vec<PaletteEntry> {
    threads.iter().map(ThreadColor::to_palette_entry).collect()
}

/// A catalog thread chosen for at least one input color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedThread {
    pub thread: ThreadColor,
    /// How many input colors resolved to this thread.
    pub color_count: usize,
    /// Largest distance among those input colors.
    pub max_distance: f64,
}

/// Result of resolving a color set against a thread catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadMatchSet {
    /// Distinct threads in the order they were first matched.
    pub threads: Vec<MatchedThread>,
    /// For each input color, the index of its thread in `threads`.
    /// `None` only when the catalog is empty.
    pub assignments: Vec<Option<usize>>,
}

impl ThreadMatchSet {
    /// Thread assigned to the input color at `index`.
    pub fn thread_for(&self, index: usize) -> Option<&MatchedThread> {
        self.assignments
            .get(index)
            .copied()
            .flatten()
            .map(|slot| &self.threads[slot])
    }
}

/// Resolve every color to its closest catalog thread, listing each thread once.
pub fn match_colors_to_threads(
    colors: &[Rgb],
    threads: &[ThreadColor],
    algorithm: DistanceAlgorithm,
) -> ThreadMatchSet {
    let palette = thread_palette(threads);

    // Palette ids back to catalog rows. Duplicate ids keep the first row,
    // matching the resolver's first-wins tie rule.
    let mut catalog_index: HashMap<&str, usize> = HashMap::with_capacity(palette.len());
    for (row, entry) in palette.iter().enumerate() {
        catalog_index.entry(entry.id.as_str()).or_insert(row);
    }

    let mut set = ThreadMatchSet {
        threads: Vec::new(),
        assignments: Vec::with_capacity(colors.len()),
    };
    let mut slot_by_row: HashMap<usize, usize> = HashMap::new();

    for &color in colors {
        let Some(found) = find_closest_color(color, &palette, algorithm) else {
            set.assignments.push(None);
            continue;
        };
        let row = catalog_index[found.color_id.as_str()];

        let slot = *slot_by_row.entry(row).or_insert_with(|| {
            set.threads.push(MatchedThread {
                thread: threads[row].clone(),
                color_count: 0,
                max_distance: 0.0,
            });
            set.threads.len() - 1
        });

        let matched = &mut set.threads[slot];
        matched.color_count += 1;
        matched.max_distance = matched.max_distance.max(found.distance);
        set.assignments.push(Some(slot));
    }

    tracing::debug!(
        "resolved {} colors to {} distinct threads ({algorithm})",
        colors.len(),
        set.threads.len()
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(code: &str, name: &str, rgb: [u8; 3]) -> ThreadColor {
        ThreadColor {
            code: code.to_string(),
            name: name.to_string(),
            rgb: rgb.into(),
            brand: ThreadBrand::Dmc,
            category: None,
        }
    }

    fn small_catalog() -> Vec<ThreadColor> {
        vec![
            thread("B5200", "Snow White", [255, 255, 255]),
            thread("310", "Black", [0, 0, 0]),
            thread("321", "Red", [199, 43, 59]),
        ]
    }

    #[test]
    fn test_palette_id_format() {
        let t = thread("310", "Black", [0, 0, 0]);
        assert_eq!(t.palette_id(), "DMC-310");
        let entry = t.to_palette_entry();
        assert_eq!(entry.id, "DMC-310");
        assert_eq!(entry.name.as_deref(), Some("Black"));
    }

    #[test]
    fn test_brand_parse_and_serde() {
        assert_eq!("dmc".parse::<ThreadBrand>(), Ok(ThreadBrand::Dmc));
        assert_eq!("Kreinik".parse::<ThreadBrand>(), Ok(ThreadBrand::Kreinik));
        assert!(matches!(
            "Madeira".parse::<ThreadBrand>(),
            Err(ColorError::UnknownThreadBrand(_))
        ));
        assert_eq!(serde_json::to_string(&ThreadBrand::Dmc).unwrap(), "\"DMC\"");
        assert_eq!(serde_json::to_string(&ThreadBrand::Anchor).unwrap(), "\"Anchor\"");
    }

    #[test]
    fn test_duplicate_threads_collapse() {
        let catalog = small_catalog();
        let colors = [
            Rgb::new(10, 10, 10),
            Rgb::new(250, 250, 250),
            Rgb::new(5, 0, 3),
            Rgb::new(190, 40, 60),
        ];
        let set = match_colors_to_threads(&colors, &catalog, DistanceAlgorithm::Ciede2000);

        let codes: Vec<_> = set.threads.iter().map(|m| m.thread.code.as_str()).collect();
        assert_eq!(codes, ["310", "B5200", "321"]);
        assert_eq!(set.assignments, [Some(0), Some(1), Some(0), Some(2)]);
        assert_eq!(set.threads[0].color_count, 2);
        assert!(set.threads[0].max_distance > 0.0);
        assert_eq!(set.thread_for(2).unwrap().thread.name, "Black");
    }

    #[test]
    fn test_empty_catalog_assigns_nothing() {
        let set = match_colors_to_threads(&[Rgb::WHITE], &[], DistanceAlgorithm::default());
        assert!(set.threads.is_empty());
        assert_eq!(set.assignments, [None]);
        assert!(set.thread_for(0).is_none());
    }
}
