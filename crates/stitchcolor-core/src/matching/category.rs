//! Human-readable bands for a ΔE value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How different two colors look, bucketed from a ΔE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceCategory {
    ExactMatch,
    Imperceptible,
    VeryClose,
    Close,
    Noticeable,
    Different,
    VeryDifferent,
}

impl DifferenceCategory {
    /// Label shown next to a match in the color picker.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact match",
            Self::Imperceptible => "imperceptible",
            Self::VeryClose => "very close",
            Self::Close => "close",
            Self::Noticeable => "noticeable",
            Self::Different => "different",
            Self::VeryDifferent => "very different",
        }
    }
}

impl fmt::Display for DifferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a ΔE value.
///
/// ```text
/// 0        exact match
/// < 1      imperceptible
/// < 2      very close
/// < 3.5    close
/// < 5      noticeable
/// < 10     different
/// ≥ 10     very different
/// ```
pub fn color_difference_category(delta_e: f64) -> DifferenceCategory {
    if delta_e == 0.0 {
        DifferenceCategory::ExactMatch
    } else if delta_e < 1.0 {
        DifferenceCategory::Imperceptible
    } else if delta_e < 2.0 {
        DifferenceCategory::VeryClose
    } else if delta_e < 3.5 {
        DifferenceCategory::Close
    } else if delta_e < 5.0 {
        DifferenceCategory::Noticeable
    } else if delta_e < 10.0 {
        DifferenceCategory::Different
    } else {
        DifferenceCategory::VeryDifferent
    }
}
