//! RGBA tint colors as the host sends them.
//!
//! The host encodes a color as four 0-255 channels. Depending on which script
//! produced it, that is an array `[r, g, b, a]`, an object `{r, g, b, a}`, or a
//! vector `{x, y, z, w}`. All three decode into [`Rgba`].

use ratzilla::ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RgbaRepr")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a 0..=1 opacity (`a / 255`).
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// CSS form used for the `--theme-color` custom property.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha())
    }
}

/// Terminal cells have no alpha channel, so only the RGB part survives.
impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RgbaRepr {
    Array([f64; 4]),
    Named { r: f64, g: f64, b: f64, a: f64 },
    Vector { x: f64, y: f64, z: f64, w: f64 },
}

impl From<RgbaRepr> for Rgba {
    fn from(repr: RgbaRepr) -> Self {
        let [r, g, b, a] = match repr {
            RgbaRepr::Array(channels) => channels,
            RgbaRepr::Named { r, g, b, a } => [r, g, b, a],
            RgbaRepr::Vector { x, y, z, w } => [x, y, z, w],
        };
        Rgba::new(channel(r), channel(g), channel(b), channel(a))
    }
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
