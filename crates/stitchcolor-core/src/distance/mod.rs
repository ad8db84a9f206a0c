//! Perceptual distance metrics between two colors.
//!
//! The metric set is closed: [`DistanceAlgorithm`] names every variant and
//! [`color_distance`] dispatches on it. Every metric is commutative and
//! returns exactly zero for identical inputs.

pub mod delta_e;
pub mod rgb;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_space::Rgb;
use crate::error::ColorError;

pub use delta_e::{
    Cie94Mode, delta_e76, delta_e76_lab, delta_e94, delta_e94_lab, delta_e94_with_mode,
    delta_e2000, delta_e2000_lab,
};
pub use rgb::{euclidean_distance, weighted_rgb_distance};

/// Identifies the color difference formula used for matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceAlgorithm {
    /// Euclidean distance over raw RGB channels.
    Euclidean,
    /// Red-mean weighted RGB distance.
    Weighted,
    /// CIE76 ΔE*ab.
    Cie76,
    /// CIE94 ΔE with textile weighting.
    Cie94,
    /// CIEDE2000 ΔE₀₀. Default for all matching.
    #[default]
    Ciede2000,
}

impl DistanceAlgorithm {
    /// Every algorithm, cheapest first.
    pub const ALL: [Self; 5] = [
        Self::Euclidean,
        Self::Weighted,
        Self::Cie76,
        Self::Cie94,
        Self::Ciede2000,
    ];

    /// Wire name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Weighted => "weighted",
            Self::Cie76 => "cie76",
            Self::Cie94 => "cie94",
            Self::Ciede2000 => "ciede2000",
        }
    }

    /// Whether the metric is measured in CIELAB (a ΔE) rather than RGB units.
    pub const fn is_perceptual(&self) -> bool {
        matches!(self, Self::Cie76 | Self::Cie94 | Self::Ciede2000)
    }
}

impl fmt::Display for DistanceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceAlgorithm {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownAlgorithm(name.to_string()))
    }
}

/// Distance between two colors under the chosen algorithm.
pub fn color_distance(c1: Rgb, c2: Rgb, algorithm: DistanceAlgorithm) -> f64 {
    match algorithm {
        DistanceAlgorithm::Euclidean => euclidean_distance(c1, c2),
        DistanceAlgorithm::Weighted => weighted_rgb_distance(c1, c2),
        DistanceAlgorithm::Cie76 => delta_e76(c1, c2),
        DistanceAlgorithm::Cie94 => delta_e94(c1, c2),
        DistanceAlgorithm::Ciede2000 => delta_e2000(c1, c2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgb; 8] = [
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(255, 0, 0),
        Rgb::new(0, 128, 255),
        Rgb::new(12, 200, 37),
        Rgb::new(128, 128, 128),
        Rgb::new(250, 240, 5),
        Rgb::new(90, 30, 160),
    ];

    #[test]
    fn test_all_algorithms_symmetric() {
        for algo in DistanceAlgorithm::ALL {
            for &a in &SAMPLES {
                for &b in &SAMPLES {
                    let ab = color_distance(a, b, algo);
                    let ba = color_distance(b, a, algo);
                    assert!((ab - ba).abs() < 1e-9, "{algo}: {a:?} vs {b:?}: {ab} != {ba}");
                }
            }
        }
    }

    #[test]
    fn test_all_algorithms_identity_and_positive() {
        for algo in DistanceAlgorithm::ALL {
            for &a in &SAMPLES {
                assert_eq!(color_distance(a, a, algo), 0.0, "{algo}: {a:?}");
                for &b in SAMPLES.iter().filter(|&&b| b != a) {
                    assert!(color_distance(a, b, algo) > 0.0, "{algo}: {a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_default_is_ciede2000() {
        assert_eq!(DistanceAlgorithm::default(), DistanceAlgorithm::Ciede2000);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cie94".parse::<DistanceAlgorithm>(), Ok(DistanceAlgorithm::Cie94));
        assert_eq!(" CIEDE2000 ".parse::<DistanceAlgorithm>(), Ok(DistanceAlgorithm::Ciede2000));
        assert_eq!(
            "lab".parse::<DistanceAlgorithm>(),
            Err(ColorError::UnknownAlgorithm("lab".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for algo in DistanceAlgorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{algo}\""));
        }
    }
}
