//! CIE Delta E color-difference formulas over CIELAB.
//!
//! Each formula has a `_lab` form that works on [`Lab`] values and an RGB
//! convenience form that converts both inputs first.
//!
//! # Reference
//! - CIE 116-1995 — CIE94 industrial colour-difference evaluation
//! - Sharma, Wu, Dalal (2005) — The CIEDE2000 Color-Difference Formula:
//!   Implementation Notes, Supplementary Test Data, and Mathematical Observations

use serde::{Deserialize, Serialize};

use crate::color_space::types::normalize_degrees;
use crate::color_space::{Lab, Rgb, rgb_to_lab};

/// `25^7`, the chroma knee shared by CIEDE2000's G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Application-specific weighting for CIE94.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cie94Mode {
    /// kL = 2, K1 = 0.048, K2 = 0.014. Thread matching uses this.
    #[default]
    Textiles,
    /// kL = 1, K1 = 0.045, K2 = 0.015.
    GraphicArts,
}

impl Cie94Mode {
    /// `(kL, K1, K2)` for this mode.
    pub const fn weights(self) -> (f64, f64, f64) {
        match self {
            Self::Textiles => (2.0, 0.048, 0.014),
            Self::GraphicArts => (1.0, 0.045, 0.015),
        }
    }
}

/// CIE76: Euclidean distance between two LAB points.
pub fn delta_e76_lab(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE94 with separate lightness, chroma and hue terms.
///
/// ```text
/// ΔH² = max(0, Δa² + Δb² − ΔC²)
/// SL = 1,  SC = 1 + K1·C̄,  SH = 1 + K2·C̄
/// ΔE = sqrt((ΔL / kL·SL)² + (ΔC / SC)² + (ΔH / SH)²)
/// ```
///
/// The published formula takes C̄ from the reference sample, which makes it
/// asymmetric. Swatch matching has no reference side, so C̄ is the geometric
/// mean of both chromas instead.
pub fn delta_e94_lab(lab1: Lab, lab2: Lab, mode: Cie94Mode) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;

    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;

    let dh2 = da * da + db * db - dc * dc;
    let dh = if dh2 > 0.0 { dh2.sqrt() } else { 0.0 };

    let (kl, k1, k2) = mode.weights();
    let c_ref = (c1 * c2).sqrt();

    let sl = 1.0;
    let sc = 1.0 + k1 * c_ref;
    let sh = 1.0 + k2 * c_ref;

    let term_l = dl / (kl * sl);
    let term_c = dc / sc;
    let term_h = dh / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}

/// CIEDE2000 with unit parametric factors (kL = kC = kH = 1).
///
/// # Algorithm
/// 1. Rotate a* by `1 + G`, where G damps low-chroma noise near the neutral axis
/// 2. Compute C′ and h′ per color; h′ in `[0, 360)`
/// 3. Differences ΔL′, ΔC′, Δh′ (wrapped to ±180°) and ΔH′
/// 4. Averages L̄′, C̄′, h̄′ (hue mean takes the short way around the circle)
/// 5. Weighting functions SL, SC, SH and the hue rotation term R_T
///
/// When either C′ is zero the hue is undefined: Δh′ collapses to 0 and h̄′ is
/// the plain sum of the two hue angles.
pub fn delta_e2000_lab(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    let c_avg = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_avg_pow7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);

    let c1p = (a1p * a1p + b1 * b1).sqrt();
    let c2p = (a2p * a2p + b2 * b2).sqrt();

    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    let dl_p = l2 - l1;
    let dc_p = c2p - c1p;

    let chroma_product = c1p * c2p;
    let dhp = if chroma_product == 0.0 {
        0.0
    } else if (h2p - h1p).abs() <= 180.0 {
        h2p - h1p
    } else if h2p - h1p > 180.0 {
        h2p - h1p - 360.0
    } else {
        h2p - h1p + 360.0
    };
    let dh_p = 2.0 * chroma_product.sqrt() * (dhp.to_radians() / 2.0).sin();

    let lp = (l1 + l2) / 2.0;
    let cp = (c1p + c2p) / 2.0;

    let hp = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp).to_radians().cos()
        + 0.32 * (3.0 * hp + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp - 63.0).to_radians().cos();

    let lp_minus_50_sq = (lp - 50.0).powi(2);
    let sl = 1.0 + (0.015 * lp_minus_50_sq) / (20.0 + lp_minus_50_sq).sqrt();
    let sc = 1.0 + 0.045 * cp;
    let sh = 1.0 + 0.015 * cp * t;

    let d_theta = 30.0 * (-((hp - 275.0) / 25.0).powi(2)).exp();
    let cp_pow7 = cp.powi(7);
    let rc = 2.0 * (cp_pow7 / (cp_pow7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let term_l = dl_p / sl;
    let term_c = dc_p / sc;
    let term_h = dh_p / sh;

    // R_T can pull the radicand a hair below zero for near-identical inputs.
    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h)
        .max(0.0)
        .sqrt()
}

/// CIE76 between two sRGB colors.
pub fn delta_e76(c1: Rgb, c2: Rgb) -> f64 {
    delta_e76_lab(rgb_to_lab(c1), rgb_to_lab(c2))
}

/// CIE94 between two sRGB colors, textile weighting.
pub fn delta_e94(c1: Rgb, c2: Rgb) -> f64 {
    delta_e94_with_mode(c1, c2, Cie94Mode::Textiles)
}

/// CIE94 between two sRGB colors with explicit weighting.
pub fn delta_e94_with_mode(c1: Rgb, c2: Rgb, mode: Cie94Mode) -> f64 {
    delta_e94_lab(rgb_to_lab(c1), rgb_to_lab(c2), mode)
}

/// CIEDE2000 between two sRGB colors.
pub fn delta_e2000(c1: Rgb, c2: Rgb) -> f64 {
    delta_e2000_lab(rgb_to_lab(c1), rgb_to_lab(c2))
}

/// `atan2(b, a′)` in degrees folded into `[0, 360)`; 0 on the neutral axis.
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    normalize_degrees(b.atan2(a_prime).to_degrees())
}
