//! Map type for generated tile layouts.
//!
//! A map is a rectangular, row-major grid of tile identifiers plus the seed
//! that produced it (`0` for maps derived from source art). It serializes as
//!
//! ```json
//! {
//!   "width": 2,
//!   "height": 1,
//!   "seed": 42,
//!   "tiles": [["tileGrass1", "tileGrass2"]]
//! }
//! ```
//!
//! Maps are built once by a generator, validated, and only read afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GenesisError, Result};

use super::TileId;

/// Largest allowed seed (ten decimal digits).
pub const MAX_SEED: u64 = 9_999_999_999;

/// A generated tile map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    width: usize,
    height: usize,
    seed: u64,
    /// Tile grid (row-major: tiles[y][x]).
    tiles: Vec<Vec<TileId>>,
}

impl Map {
    /// Create a map, checking its structural invariants.
    pub fn new(width: usize, height: usize, seed: u64, tiles: Vec<Vec<TileId>>) -> Result<Self> {
        let map = Self {
            width,
            height,
            seed,
            tiles,
        };
        map.validate()?;
        Ok(map)
    }

    /// Check the structural invariants, reporting the first one violated.
    ///
    /// Order: dimensions, seed range, row count, row lengths.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GenesisError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.seed > MAX_SEED {
            return Err(GenesisError::InvalidSeed { seed: self.seed });
        }
        if self.tiles.len() != self.height {
            return Err(GenesisError::InvalidTilesHeight {
                expected: self.height,
                actual: self.tiles.len(),
            });
        }
        for (row, tiles) in self.tiles.iter().enumerate() {
            if tiles.len() != self.width {
                return Err(GenesisError::InvalidTilesWidth {
                    row,
                    expected: self.width,
                    actual: tiles.len(),
                });
            }
        }
        Ok(())
    }

    /// Width of the map in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the map in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The tile rows, top to bottom.
    pub fn rows(&self) -> &[Vec<TileId>] {
        &self.tiles
    }

    /// Bounds-checked tile lookup.
    ///
    /// Returns `None` outside the map and also when the stored grid does not
    /// match the declared dimensions. Never panics.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileId> {
        if x >= self.width || y >= self.height || self.tiles.len() != self.height {
            return None;
        }
        let row = self.tiles.get(y)?;
        if row.len() != self.width {
            return None;
        }
        row.get(x).copied()
    }

    /// Look up the tile under a world-space point.
    ///
    /// Tiles are `tile_size` squares with the map origin at world `(0, 0)`.
    /// Returns `None` for non-positive or non-finite tile sizes, negative or
    /// NaN coordinates, and anything past the map edge, however large.
    pub fn tile_at_world(&self, world_x: f64, world_y: f64, tile_size: f64) -> Option<TileId> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return None;
        }
        let x = world_to_index(world_x, tile_size, self.width)?;
        let y = world_to_index(world_y, tile_size, self.height)?;
        self.tile_at(x, y)
    }

    /// Iterate over all tiles with their positions, row-major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &tile)| (x, y, tile))
        })
    }

    /// Count how often each identifier is used.
    pub fn tile_counts(&self) -> BTreeMap<TileId, usize> {
        let mut counts = BTreeMap::new();
        for (_, _, tile) in self.iter_tiles() {
            *counts.entry(tile).or_insert(0) += 1;
        }
        counts
    }
}

/// Convert one world coordinate to a tile index below `limit`.
///
/// The comparison happens in floating point so huge coordinates never reach
/// the integer cast.
fn world_to_index(world: f64, tile_size: f64, limit: usize) -> Option<usize> {
    if world.is_nan() || world < 0.0 {
        return None;
    }
    let index = (world / tile_size).floor();
    if !index.is_finite() || index >= limit as f64 {
        return None;
    }
    Some(index as usize)
}
