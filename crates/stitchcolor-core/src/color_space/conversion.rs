//! sRGB ↔ XYZ ↔ CIELAB conversion (D65 white point).
//!
//! Every function here is total. The inverse path ends in a round-and-clamp to
//! the 8-bit cube, so out-of-gamut LAB input comes back as the nearest
//! displayable color without any signal to the caller.
//!
//! # Reference
//! - IEC 61966-2-1 — sRGB transfer function and primaries
//! - Lindbloom, Bruce J. — RGB/XYZ matrices, CIE L*a*b* formulas

use super::types::{Lab, Rgb, Xyz};

/// D65 reference white, Y normalized to 100.
pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.000, 108.883);

/// CIE threshold between the cube-root and linear segments of f().
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment of f().
const KAPPA: f64 = 903.3;

/// Linear sRGB (0–100) → XYZ, D65.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ → linear sRGB (0–100), D65. Inverse of [`SRGB_TO_XYZ`].
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Convert an 8-bit sRGB color to XYZ.
///
/// ```text
/// V <= 0.04045 → V / 12.92
/// V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
/// XYZ = M × (100 × linear)
/// ```
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = [
        srgb_to_linear(rgb.r as f64 / 255.0) * 100.0,
        srgb_to_linear(rgb.g as f64 / 255.0) * 100.0,
        srgb_to_linear(rgb.b as f64 / 255.0) * 100.0,
    ];
    let [x, y, z] = mat3_vec3(SRGB_TO_XYZ, linear);
    Xyz::new(x, y, z)
}

/// Convert XYZ to CIELAB relative to [`D65_WHITE`].
///
/// ```text
/// f(t) = cbrt(t)               t > 0.008856
///        (903.3 × t + 16)/116  otherwise
/// L = 116 fy − 16,  a = 500 (fx − fy),  b = 200 (fy − fz)
/// ```
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert an 8-bit sRGB color straight to CIELAB.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert CIELAB back to XYZ. Exact inverse of [`xyz_to_lab`] per branch.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz::new(
        lab_f_inv(fx) * D65_WHITE.x,
        lab_f_inv(fy) * D65_WHITE.y,
        lab_f_inv(fz) * D65_WHITE.z,
    )
}

/// Convert XYZ to an 8-bit sRGB color, clamping each channel to `[0, 255]`.
///
/// ```text
/// L <= 0.0031308 → L × 12.92
/// L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let [r, g, b] = mat3_vec3(XYZ_TO_SRGB, [xyz.x, xyz.y, xyz.z]);
    Rgb::new(
        quantize(linear_to_srgb(r / 100.0)),
        quantize(linear_to_srgb(g / 100.0)),
        quantize(linear_to_srgb(b / 100.0)),
    )
}

/// Convert CIELAB to an 8-bit sRGB color. Lossy for out-of-gamut input.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// Scale a unit-range channel to 8 bits. NaN maps to 0.
fn quantize(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn mat3_vec3(m: [[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_maps_to_l100() {
        let lab = rgb_to_lab(Rgb::WHITE);
        assert!((lab.l - 100.0).abs() < 0.1);
        assert!(lab.a.abs() < 0.1);
        assert!(lab.b.abs() < 0.1);
    }

    #[test]
    fn test_black_maps_to_l0() {
        let lab = rgb_to_lab(Rgb::BLACK);
        assert!(lab.l.abs() < 0.1);
        assert!(lab.a.abs() < 1e-9);
        assert!(lab.b.abs() < 1e-9);
    }

    #[test]
    fn test_white_xyz_matches_reference_white() {
        let xyz = rgb_to_xyz(Rgb::WHITE);
        assert!((xyz.x - D65_WHITE.x).abs() < 0.01, "x = {}", xyz.x);
        assert!((xyz.y - D65_WHITE.y).abs() < 0.01, "y = {}", xyz.y);
        assert!((xyz.z - D65_WHITE.z).abs() < 0.01, "z = {}", xyz.z);
    }

    #[test]
    fn test_pure_red_lab() {
        // Commonly published D65 value for sRGB red: (53.24, 80.09, 67.20)
        let lab = rgb_to_lab(Rgb::new(255, 0, 0));
        assert!((lab.l - 53.24).abs() < 0.05, "L = {}", lab.l);
        assert!((lab.a - 80.09).abs() < 0.05, "a = {}", lab.a);
        assert!((lab.b - 67.20).abs() < 0.05, "b = {}", lab.b);
    }

    #[test]
    fn test_lab_xyz_inverse_both_branches() {
        // One XYZ above and one below the f() threshold on every axis.
        for xyz in [Xyz::new(41.24, 21.26, 1.93), Xyz::new(0.2, 0.3, 0.4)] {
            let back = lab_to_xyz(xyz_to_lab(xyz));
            assert!((back.x - xyz.x).abs() < 1e-9, "{xyz:?} -> {back:?}");
            assert!((back.y - xyz.y).abs() < 1e-9, "{xyz:?} -> {back:?}");
            assert!((back.z - xyz.z).abs() < 1e-9, "{xyz:?} -> {back:?}");
        }
    }

    #[test]
    fn test_out_of_gamut_lab_clamps() {
        assert_eq!(lab_to_rgb(Lab::new(150.0, 0.0, 0.0)), Rgb::WHITE);
        assert_eq!(lab_to_rgb(Lab::new(-20.0, 0.0, 0.0)), Rgb::BLACK);

        let wild = lab_to_rgb(Lab::new(50.0, 200.0, -200.0));
        assert_eq!(wild.g, 0);
    }

    #[test]
    fn test_primaries_round_trip_exactly() {
        for c in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(128, 128, 128),
            Rgb::new(3, 2, 1),
        ] {
            assert_eq!(lab_to_rgb(rgb_to_lab(c)), c);
        }
    }
}
