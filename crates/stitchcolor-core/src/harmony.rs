//! Hue-relationship harmony score for a set of colors.
//!
//! Scores every pair of chromatic colors by the angle between their LAB hues,
//! rewarding the classic color-wheel relationships, and averages the pairs.
//! Sets with fewer than two chromatic colors are scored on how tightly their
//! lightness clusters instead.

use crate::color_space::{Rgb, rgb_to_lab};

/// Colors at or below this LAB chroma carry no usable hue.
const ACHROMATIC_CHROMA: f64 = 0.1;

/// Lightness variance at which the achromatic fallback bottoms out at 0.
const LIGHTNESS_VARIANCE_SCALE: f64 = 2500.0;

/// Harmony score in `[0, 1]`, higher is more harmonious.
///
/// Pair scores by minimal hue angle Δh:
///
/// ```text
/// Δh = 0        1.00  identical hue
/// Δh < 20       0.90  monochromatic
/// Δh < 40       0.80  analogous
/// 150 ≤ Δh ≤ 180  0.85  complementary
/// 110 ≤ Δh ≤ 130  0.75  triadic
///  80 ≤ Δh ≤ 100  0.70  square
/// otherwise     0.50
/// ```
pub fn calculate_color_harmony(colors: &[Rgb]) -> f64 {
    let labs: Vec<_> = colors.iter().map(|&c| rgb_to_lab(c)).collect();

    let hues: Vec<f64> = labs
        .iter()
        .filter(|lab| lab.chroma() > ACHROMATIC_CHROMA)
        .map(|lab| lab.hue_degrees())
        .collect();

    if hues.len() < 2 {
        let lightness: Vec<f64> = labs.iter().map(|lab| lab.l).collect();
        return (1.0 - variance(&lightness) / LIGHTNESS_VARIANCE_SCALE).max(0.0);
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, &h1) in hues.iter().enumerate() {
        for &h2 in &hues[i + 1..] {
            total += hue_pair_score(hue_separation(h1, h2));
            pairs += 1;
        }
    }

    total / pairs as f64
}

/// Shortest angle between two hues, in `[0, 180]`.
fn hue_separation(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    diff.min(360.0 - diff)
}

fn hue_pair_score(delta: f64) -> f64 {
    if delta == 0.0 {
        1.0
    } else if delta < 20.0 {
        0.9
    } else if delta < 40.0 {
        0.8
    } else if (150.0..=180.0).contains(&delta) {
        0.85
    } else if (110.0..=130.0).contains(&delta) {
        0.75
    } else if (80.0..=100.0).contains(&delta) {
        0.7
    } else {
        0.5
    }
}

/// Population variance; 0 for an empty slice.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
