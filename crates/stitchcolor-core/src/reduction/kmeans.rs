//! k-means++ palette reduction in CIELAB.
//!
//! Clusters an unordered color collection into `k` representatives. Seeding
//! is randomized; the caller supplies the random source, so a seeded
//! [`rand::rngs::StdRng`] gives repeatable palettes.
//!
//! # Algorithm
//! 1. Return the input unchanged when it already has `k` colors or fewer
//! 2. Convert every color to LAB
//! 3. k-means++ seeding: first centroid uniform, each next one drawn with
//!    probability proportional to D², the squared distance to the nearest
//!    centroid chosen so far
//! 4. Lloyd rounds: assign by squared Euclidean LAB distance, move each
//!    centroid to the mean of its members; empty clusters stay put
//! 5. Stop early once no centroid component moved more than the threshold
//! 6. Convert centroids back to RGB
//!
//! Assignment uses plain LAB distance rather than ΔE2000; it is close enough
//! for clustering and much cheaper per iteration.
//!
//! # Complexity
//! - Seeding: O(n × k)
//! - Each Lloyd round: O(n × k)

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color_space::{Lab, Rgb, lab_to_rgb, rgb_to_lab};

/// Tuning for [`reduce_color_palette_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Upper bound on Lloyd rounds. Default: 20.
    pub max_iterations: usize,
    /// Largest per-component centroid movement (LAB units) that still counts
    /// as converged. Default: 0.1.
    pub convergence_threshold: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            convergence_threshold: 0.1,
        }
    }
}

/// Reduce `colors` to `k` representatives with the default [`KMeansConfig`].
///
/// Returns a copy of `colors` when `colors.len() <= k`; otherwise exactly `k`
/// colors. Separate calls with different random states can return different
/// (comparably good) palettes.
pub fn reduce_color_palette<R: Rng + ?Sized>(colors: &[Rgb], k: usize, rng: &mut R) -> Vec<Rgb> {
    reduce_color_palette_with(colors, k, &KMeansConfig::default(), rng)
}

/// Reduce `colors` to `k` representatives.
pub fn reduce_color_palette_with<R: Rng + ?Sized>(
    colors: &[Rgb],
    k: usize,
    config: &KMeansConfig,
    rng: &mut R,
) -> Vec<Rgb> {
    if colors.len() <= k {
        return colors.to_vec();
    }
    if k == 0 {
        return Vec::new();
    }

    let points: Vec<DVec3> = colors.iter().map(|&c| rgb_to_lab(c).into()).collect();

    let mut centroids = seed_centroids(&points, k, rng);
    tracing::debug!("seeded {k} centroids from {} colors", points.len());

    let mut assignments = vec![0usize; points.len()];
    let mut converged = false;

    for round in 1..=config.max_iterations {
        for (slot, point) in assignments.iter_mut().zip(&points) {
            *slot = nearest_centroid(*point, &centroids).0;
        }

        let mut sums = vec![DVec3::ZERO; k];
        let mut counts = vec![0usize; k];
        for (&cluster, &point) in assignments.iter().zip(&points) {
            sums[cluster] += point;
            counts[cluster] += 1;
        }

        let mut max_shift = 0.0_f64;
        for ((centroid, sum), count) in centroids.iter_mut().zip(&sums).zip(&counts) {
            if *count == 0 {
                continue;
            }
            let updated = *sum / *count as f64;
            max_shift = max_shift.max((updated - *centroid).abs().max_element());
            *centroid = updated;
        }

        if max_shift <= config.convergence_threshold {
            tracing::debug!("palette reduction converged after {round} rounds");
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::debug!(
            "palette reduction stopped at the {} round limit",
            config.max_iterations
        );
    }

    centroids
        .into_iter()
        .map(|c| lab_to_rgb(Lab::from(c)))
        .collect()
}

/// k-means++ seeding. `points.len() > k > 0`.
fn seed_centroids<R: Rng + ?Sized>(points: &[DVec3], k: usize, rng: &mut R) -> Vec<DVec3> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    // D² to the nearest chosen centroid, refreshed as centroids are added.
    let mut weights: Vec<f64> = points
        .iter()
        .map(|p| p.distance_squared(centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = weights.iter().sum();

        let pick = if total > 0.0 && total.is_finite() {
            weighted_index(&weights, rng.gen_range(0.0..total))
        } else {
            // Every point already coincides with a centroid.
            tracing::trace!("all seeding weights are zero, drawing uniformly");
            rng.gen_range(0..points.len())
        };

        let chosen = points[pick];
        centroids.push(chosen);
        for (w, p) in weights.iter_mut().zip(points) {
            *w = w.min(p.distance_squared(chosen));
        }
    }

    centroids
}

/// Index whose cumulative weight first exceeds `target`.
fn weighted_index(weights: &[f64], target: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > target {
            return i;
        }
    }
    // Rounding left `target` at the very top; take the last positive weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
}

/// `(index, squared distance)` of the closest centroid; ties keep the lower index.
fn nearest_centroid(point: DVec3, centroids: &[DVec3]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, c) in centroids.iter().enumerate() {
        let d = point.distance_squared(*c);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn gradient(n: usize) -> Vec<Rgb> {
        (0..n)
            .map(|i| {
                let v = (i * 255 / (n - 1)) as u8;
                Rgb::new(v, 255 - v, (i * 37 % 256) as u8)
            })
            .collect()
    }

    #[test]
    fn test_small_input_passes_through() {
        let colors = vec![Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(reduce_color_palette(&colors, 2, &mut rng), colors);
        assert_eq!(reduce_color_palette(&colors, 10, &mut rng), colors);
        assert!(reduce_color_palette(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_clusters_returns_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(reduce_color_palette(&gradient(10), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_returns_exactly_k() {
        let colors = gradient(200);
        let mut rng = StdRng::seed_from_u64(42);
        for k in [1, 2, 5, 16] {
            assert_eq!(reduce_color_palette(&colors, k, &mut rng).len(), k);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let colors = gradient(120);
        let a = reduce_color_palette(&colors, 6, &mut StdRng::seed_from_u64(99));
        let b = reduce_color_palette(&colors, 6, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_separated_clusters_recovered() {
        let mut colors = Vec::new();
        for i in 0..20u8 {
            colors.push(Rgb::new(250 - i / 4, 5, 5));
            colors.push(Rgb::new(5, 5, 250 - i / 4));
            colors.push(Rgb::new(5 + i / 4, 5 + i / 4, 5));
        }
        let mut rng = StdRng::seed_from_u64(3);
        let out = reduce_color_palette(&colors, 3, &mut rng);

        assert!(out.iter().any(|c| c.r < 20 && c.b < 20), "no dark: {out:?}");
        assert!(out.iter().any(|c| c.r < 20 && c.b > 200), "no blue: {out:?}");
        assert!(out.iter().any(|c| c.r > 200 && c.b < 20), "no red: {out:?}");
    }

    #[test]
    fn test_identical_colors_still_yield_k() {
        let colors = vec![Rgb::new(80, 90, 100); 12];
        let mut rng = StdRng::seed_from_u64(1);
        let out = reduce_color_palette(&colors, 4, &mut rng);
        assert_eq!(out, vec![Rgb::new(80, 90, 100); 4]);
    }

    #[test]
    fn test_single_round_config() {
        let config = KMeansConfig {
            max_iterations: 1,
            ..KMeansConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let out = reduce_color_palette_with(&gradient(50), 4, &config, &mut rng);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: KMeansConfig = serde_json::from_str(r#"{"max_iterations": 5}"#).unwrap();
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.convergence_threshold, 0.1);
    }

    #[test]
    fn test_weighted_index_skips_zero_weights() {
        let weights = [0.0, 0.0, 2.0, 0.0, 1.0];
        assert_eq!(weighted_index(&weights, 0.0), 2);
        assert_eq!(weighted_index(&weights, 1.99), 2);
        assert_eq!(weighted_index(&weights, 2.5), 4);
        assert_eq!(weighted_index(&weights, 3.0), 4);
    }
}
