//! Seeded grass maps.
//!
//! Each cell takes one draw from a ChaCha8 stream seeded with the map seed,
//! in row-major order, and picks between the two plain grass variants. The
//! ChaCha output is specified independently of platform, so a seed always
//! reproduces the same layout.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{GenesisError, Result};
use crate::types::{Map, TileId, MAX_SEED};

/// Generate a `width` x `height` map of grass variants from `seed`.
pub fn generate_grass_map(seed: u64, width: usize, height: usize) -> Result<Map> {
    if width == 0 || height == 0 {
        return Err(GenesisError::InvalidDimensions { width, height });
    }
    if seed > MAX_SEED {
        return Err(GenesisError::InvalidSeed { seed });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let tiles: Vec<Vec<TileId>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if rng.next_u32() & 1 == 0 {
                        TileId::Grass1
                    } else {
                        TileId::Grass2
                    }
                })
                .collect()
        })
        .collect();

    Map::new(width, height, seed, tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_map_is_deterministic() {
        let first = generate_grass_map(42, 4, 3).unwrap();
        let second = generate_grass_map(42, 4, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.size(), (4, 3));
        assert_eq!(first.seed(), 42);
    }

    #[test]
    fn test_grass_map_only_uses_grass_variants() {
        let map = generate_grass_map(1, 16, 16).unwrap();
        for (_, _, tile) in map.iter_tiles() {
            assert!(matches!(tile, TileId::Grass1 | TileId::Grass2));
        }
        // 256 fair draws land on both variants.
        let counts = map.tile_counts();
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_grass_map_row_major_prefix() {
        // A wider map consumes the same stream, so the first row of a
        // 1-row map is a prefix of the first row of a longer 1-row map.
        let short = generate_grass_map(7, 5, 1).unwrap();
        let long = generate_grass_map(7, 10, 1).unwrap();
        assert_eq!(short.rows()[0][..], long.rows()[0][..5]);
    }

    #[test]
    fn test_seeds_differ() {
        let a = generate_grass_map(1, 32, 32).unwrap();
        let b = generate_grass_map(2, 32, 32).unwrap();
        assert_ne!(a.rows(), b.rows());
    }

    #[test]
    fn test_seed_bounds() {
        assert!(generate_grass_map(0, 1, 1).is_ok());
        assert!(generate_grass_map(MAX_SEED, 1, 1).is_ok());
        assert!(matches!(
            generate_grass_map(MAX_SEED + 1, 1, 1),
            Err(GenesisError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            generate_grass_map(1, 0, 4),
            Err(GenesisError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            generate_grass_map(1, 4, 0),
            Err(GenesisError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_dimensions_checked_before_seed() {
        assert!(matches!(
            generate_grass_map(MAX_SEED + 1, 0, 0),
            Err(GenesisError::InvalidDimensions { .. })
        ));
    }
}
