//! Terrain kinds and the fixed source-art palette.
//!
//! Every pixel of a source image must be exactly one of three colours:
//!
//! | Terrain | Colour    |
//! |---------|-----------|
//! | grass   | `#00FF00` |
//! | sand    | `#FFFF00` |
//! | road    | `#000000` |
//!
//! There is no tolerance and no nearest-match fallback. Any other colour,
//! including a translucent version of a palette colour, is rejected.

use std::fmt;

use crate::error::{GenesisError, Result};

use super::Colour;

/// The logical ground category of a cell.
///
/// There is no "unknown" variant: a colour that does not classify is an
/// error at classification time, so a terrain grid only ever holds these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Grass,
    Sand,
    Road,
}

impl TerrainKind {
    /// All terrain kinds, in palette order.
    pub const ALL: [TerrainKind; 3] = [TerrainKind::Grass, TerrainKind::Sand, TerrainKind::Road];

    /// Source-art colour for this terrain.
    pub const fn colour(self) -> Colour {
        match self {
            TerrainKind::Grass => Colour::rgb(0x00, 0xFF, 0x00),
            TerrainKind::Sand => Colour::rgb(0xFF, 0xFF, 0x00),
            TerrainKind::Road => Colour::rgb(0x00, 0x00, 0x00),
        }
    }

    /// Classify a pixel colour by exact match against the palette.
    ///
    /// `x`/`y` are only used to report where an unsupported colour was found.
    pub fn classify(colour: Colour, x: usize, y: usize) -> Result<Self> {
        Self::from_colour(colour).ok_or(GenesisError::UnsupportedColor { colour, x, y })
    }

    /// Exact palette lookup.
    pub fn from_colour(colour: Colour) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.colour() == colour)
    }

    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Grass => "grass",
            TerrainKind::Sand => "sand",
            TerrainKind::Road => "road",
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_palette() {
        assert_eq!(
            TerrainKind::classify(Colour::rgb(0, 255, 0), 0, 0).unwrap(),
            TerrainKind::Grass
        );
        assert_eq!(
            TerrainKind::classify(Colour::rgb(255, 255, 0), 0, 0).unwrap(),
            TerrainKind::Sand
        );
        assert_eq!(
            TerrainKind::classify(Colour::rgb(0, 0, 0), 0, 0).unwrap(),
            TerrainKind::Road
        );
    }

    #[test]
    fn test_classify_rejects_near_miss() {
        let err = TerrainKind::classify(Colour::rgb(0, 254, 0), 3, 4).unwrap_err();
        match err {
            GenesisError::UnsupportedColor { colour, x, y } => {
                assert_eq!(colour, Colour::rgb(0, 254, 0));
                assert_eq!((x, y), (3, 4));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_translucent_palette_colour() {
        assert!(TerrainKind::classify(Colour::new(0, 255, 0, 254), 0, 0).is_err());
        assert!(TerrainKind::classify(Colour::TRANSPARENT, 0, 0).is_err());
    }

    #[test]
    fn test_classify_rejects_other_colours() {
        assert!(TerrainKind::from_colour(Colour::WHITE).is_none());
        assert!(TerrainKind::from_colour(Colour::rgb(255, 0, 0)).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(TerrainKind::Road.to_string(), "road");
    }
}
