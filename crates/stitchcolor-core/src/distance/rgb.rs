//! Distances measured directly on 8-bit sRGB channels.
//!
//! Cheap and perceptually rough; kept for callers that want raw speed or
//! parity with older pattern files.

use crate::color_space::Rgb;

/// Straight Euclidean distance over the R, G, B channels.
pub fn euclidean_distance(c1: Rgb, c2: Rgb) -> f64 {
    let [dr, dg, db] = channel_deltas(c1, c2);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Euclidean RGB distance with channel weights driven by the mean red level.
///
/// ```text
/// r̄  = (r1 + r2) / 2
/// wr = 2 + r̄ / 256,   wg = 4,   wb = 2 + (255 − r̄) / 256
/// d  = sqrt(wr·ΔR² + wg·ΔG² + wb·ΔB²)
/// ```
pub fn weighted_rgb_distance(c1: Rgb, c2: Rgb) -> f64 {
    let rmean = (c1.r as f64 + c2.r as f64) / 2.0;
    let [dr, dg, db] = channel_deltas(c1, c2);

    let wr = 2.0 + rmean / 256.0;
    let wg = 4.0;
    let wb = 2.0 + (255.0 - rmean) / 256.0;

    (wr * dr * dr + wg * dg * dg + wb * db * db).sqrt()
}

fn channel_deltas(c1: Rgb, c2: Rgb) -> [f64; 3] {
    [
        c1.r as f64 - c2.r as f64,
        c1.g as f64 - c2.g as f64,
        c1.b as f64 - c2.b as f64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_black_white() {
        let d = euclidean_distance(Rgb::BLACK, Rgb::WHITE);
        assert!((d - (3.0_f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_green_counts_more_than_blue() {
        let base = Rgb::new(100, 100, 100);
        let dg = weighted_rgb_distance(base, Rgb::new(100, 110, 100));
        let db = weighted_rgb_distance(base, Rgb::new(100, 100, 110));
        assert!(dg > db);
    }

    #[test]
    fn test_weighted_pure_red_step() {
        // rmean = 5, only the red term contributes
        let d = weighted_rgb_distance(Rgb::new(0, 0, 0), Rgb::new(10, 0, 0));
        let expected = ((2.0 + 5.0 / 256.0) * 100.0_f64).sqrt();
        assert!((d - expected).abs() < 1e-12);
    }
}
