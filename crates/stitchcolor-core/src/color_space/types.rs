//! Color value types shared by every stage of the engine.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An 8-bit sRGB device color.
///
/// Serialized as a bare `[r, g, b]` array, which is the shape the project
/// file format and the host IPC layer already use for swatches.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in R, G, B order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Reinterpret an interleaved `RGBRGB…` byte buffer as colors without copying.
    ///
    /// Trailing bytes that do not form a whole triple are ignored.
    pub fn slice_from_bytes(bytes: &[u8]) -> &[Rgb] {
        let whole = bytes.len() - bytes.len() % 3;
        bytemuck::cast_slice(&bytes[..whole])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<palette::Srgb<u8>> for Rgb {
    fn from(c: palette::Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for palette::Srgb<u8> {
    fn from(c: Rgb) -> Self {
        palette::Srgb::new(c.r, c.g, c.b)
    }
}

/// CIE 1931 XYZ tristimulus values, scaled so the reference white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// CIELAB coordinates relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (diffuse white).
    pub l: f64,
    /// Green (−) to red (+) axis.
    pub a: f64,
    /// Blue (−) to yellow (+) axis.
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis in the a/b plane.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Hue angle in degrees, normalized to `[0, 360)`.
    pub fn hue_degrees(&self) -> f64 {
        normalize_degrees(self.b.atan2(self.a).to_degrees())
    }
}

impl From<Lab> for DVec3 {
    fn from(lab: Lab) -> Self {
        DVec3::new(lab.l, lab.a, lab.b)
    }
}

impl From<DVec3> for Lab {
    fn from(v: DVec3) -> Self {
        Lab::new(v.x, v.y, v.z)
    }
}

/// Fold an `atan2` result in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(h: f64) -> f64 {
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -tiny + 360.0 rounds to exactly 360.0
    if h >= 360.0 { h - 360.0 } else { h }
}
