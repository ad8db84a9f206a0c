//! Color spaces — 8-bit sRGB, CIE XYZ and CIELAB, and the conversions between them.

pub mod conversion;
pub mod types;

pub use conversion::{D65_WHITE, lab_to_rgb, lab_to_xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
pub use types::{Lab, Rgb, Xyz};
