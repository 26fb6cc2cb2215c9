//! Colour type shared by the terrain palette and preview rendering.

use std::fmt;

use image::Rgba;

/// An RGBA colour value with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear blend towards `other`; `t` is clamped to 0.0..=1.0.
    pub fn mix(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Colour::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_rgba_conversion() {
        let c: Colour = Rgba([1, 2, 3, 4]).into();
        assert_eq!(c, Colour::new(1, 2, 3, 4));

        let px: Rgba<u8> = Colour::WHITE.into();
        assert_eq!(px.0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_mix() {
        assert_eq!(Colour::BLACK.mix(Colour::WHITE, 0.0), Colour::BLACK);
        assert_eq!(Colour::BLACK.mix(Colour::WHITE, 1.0), Colour::WHITE);
        assert_eq!(Colour::BLACK.mix(Colour::WHITE, 0.5), Colour::rgb(128, 128, 128));
        assert_eq!(Colour::BLACK.mix(Colour::WHITE, 7.0), Colour::WHITE);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::TRANSPARENT.a, 0);
        assert_eq!(Colour::BLACK.to_rgba(), [0, 0, 0, 255]);
    }
}
