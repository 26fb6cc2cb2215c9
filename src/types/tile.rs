//! The closed tile catalog.
//!
//! Tile identifiers are the sprite names a renderer looks up. Internally they
//! are a finite enum; the string form only appears on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenesisError, Result};

use super::TerrainKind;

/// A sprite in the fixed tile catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileId {
    #[serde(rename = "tileGrass1")]
    Grass1,
    #[serde(rename = "tileGrass2")]
    Grass2,
    #[serde(rename = "tileSand1")]
    Sand1,

    /// Grass with sand along its north edge.
    #[serde(rename = "tileGrass_transitionN")]
    GrassTransitionN,
    #[serde(rename = "tileGrass_transitionS")]
    GrassTransitionS,
    #[serde(rename = "tileGrass_transitionE")]
    GrassTransitionE,
    #[serde(rename = "tileGrass_transitionW")]
    GrassTransitionW,

    #[serde(rename = "tileGrass_roadCrossing")]
    RoadCrossing,
    /// T-junction open to north, east and west.
    #[serde(rename = "tileGrass_roadSplitN")]
    RoadSplitN,
    /// T-junction open to east, south and west.
    #[serde(rename = "tileGrass_roadSplitS")]
    RoadSplitS,
    /// T-junction open to north, east and south.
    #[serde(rename = "tileGrass_roadSplitE")]
    RoadSplitE,
    /// T-junction open to north, south and west.
    #[serde(rename = "tileGrass_roadSplitW")]
    RoadSplitW,
    #[serde(rename = "tileGrass_roadCornerUR")]
    RoadCornerUR,
    #[serde(rename = "tileGrass_roadCornerLR")]
    RoadCornerLR,
    #[serde(rename = "tileGrass_roadCornerLL")]
    RoadCornerLL,
    #[serde(rename = "tileGrass_roadCornerUL")]
    RoadCornerUL,
    /// Straight road running east-west.
    #[serde(rename = "tileGrass_roadEast")]
    RoadEast,
    /// Straight road running north-south.
    #[serde(rename = "tileGrass_roadNorth")]
    RoadNorth,
}

impl TileId {
    /// Every identifier in the catalog.
    pub const ALL: [TileId; 18] = [
        TileId::Grass1,
        TileId::Grass2,
        TileId::Sand1,
        TileId::GrassTransitionN,
        TileId::GrassTransitionS,
        TileId::GrassTransitionE,
        TileId::GrassTransitionW,
        TileId::RoadCrossing,
        TileId::RoadSplitN,
        TileId::RoadSplitS,
        TileId::RoadSplitE,
        TileId::RoadSplitW,
        TileId::RoadCornerUR,
        TileId::RoadCornerLR,
        TileId::RoadCornerLL,
        TileId::RoadCornerUL,
        TileId::RoadEast,
        TileId::RoadNorth,
    ];

    /// The sprite name used on the wire and by renderers.
    pub const fn as_str(self) -> &'static str {
        match self {
            TileId::Grass1 => "tileGrass1",
            TileId::Grass2 => "tileGrass2",
            TileId::Sand1 => "tileSand1",
            TileId::GrassTransitionN => "tileGrass_transitionN",
            TileId::GrassTransitionS => "tileGrass_transitionS",
            TileId::GrassTransitionE => "tileGrass_transitionE",
            TileId::GrassTransitionW => "tileGrass_transitionW",
            TileId::RoadCrossing => "tileGrass_roadCrossing",
            TileId::RoadSplitN => "tileGrass_roadSplitN",
            TileId::RoadSplitS => "tileGrass_roadSplitS",
            TileId::RoadSplitE => "tileGrass_roadSplitE",
            TileId::RoadSplitW => "tileGrass_roadSplitW",
            TileId::RoadCornerUR => "tileGrass_roadCornerUR",
            TileId::RoadCornerLR => "tileGrass_roadCornerLR",
            TileId::RoadCornerLL => "tileGrass_roadCornerLL",
            TileId::RoadCornerUL => "tileGrass_roadCornerUL",
            TileId::RoadEast => "tileGrass_roadEast",
            TileId::RoadNorth => "tileGrass_roadNorth",
        }
    }

    /// The terrain this sprite depicts.
    pub const fn terrain(self) -> TerrainKind {
        match self {
            TileId::Grass1
            | TileId::Grass2
            | TileId::GrassTransitionN
            | TileId::GrassTransitionS
            | TileId::GrassTransitionE
            | TileId::GrassTransitionW => TerrainKind::Grass,
            TileId::Sand1 => TerrainKind::Sand,
            TileId::RoadCrossing
            | TileId::RoadSplitN
            | TileId::RoadSplitS
            | TileId::RoadSplitE
            | TileId::RoadSplitW
            | TileId::RoadCornerUR
            | TileId::RoadCornerLR
            | TileId::RoadCornerLL
            | TileId::RoadCornerUL
            | TileId::RoadEast
            | TileId::RoadNorth => TerrainKind::Road,
        }
    }
}

impl FromStr for TileId {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tile| tile.as_str() == s)
            .ok_or_else(|| GenesisError::Parse {
                message: format!("Unknown tile identifier: {}", s),
                help: Some("Tile identifiers must come from the fixed catalog".to_string()),
            })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique_and_non_empty() {
        let mut names: Vec<&str> = TileId::ALL.iter().map(|t| t.as_str()).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TileId::ALL.len());
    }

    #[test]
    fn test_from_str() {
        for tile in TileId::ALL {
            assert_eq!(tile.as_str().parse::<TileId>().unwrap(), tile);
        }
        assert!("tileWater1".parse::<TileId>().is_err());
        assert!("".parse::<TileId>().is_err());
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        for tile in TileId::ALL {
            let json = serde_json::to_string(&tile).unwrap();
            assert_eq!(json, format!("\"{}\"", tile.as_str()));
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<TileId>("\"tileLava\"").is_err());
    }

    #[test]
    fn test_terrain() {
        assert_eq!(TileId::Grass2.terrain(), TerrainKind::Grass);
        assert_eq!(TileId::GrassTransitionW.terrain(), TerrainKind::Grass);
        assert_eq!(TileId::Sand1.terrain(), TerrainKind::Sand);
        assert_eq!(TileId::RoadCornerUL.terrain(), TerrainKind::Road);
    }
}
