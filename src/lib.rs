//! genesis - Tile map generation
//!
//! Turns a pixel-art reference image or a numeric seed into a validated,
//! rectangular grid of tile identifiers that a renderer can draw.
//!
//! ```
//! use genesis::{generate_grass_map, TileId};
//!
//! let map = generate_grass_map(42, 8, 4).unwrap();
//! assert_eq!(map.size(), (8, 4));
//! assert!(matches!(map.tile_at(0, 0), Some(TileId::Grass1 | TileId::Grass2)));
//! assert_eq!(map.tile_at(8, 0), None);
//! ```

pub mod cli;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use error::{GenesisError, Result};
pub use generate::{
    classify_image, generate_from_grid, generate_from_image, generate_grass_map, grass_tile,
    road_tile, AdjacencyMask, Direction, PixelSource, RoadShape, TerrainGrid,
};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use render::{
    map_to_json, parse_map_json, read_map_json, render_preview, visual_path_for, write_map_json,
    write_preview, TileArt,
};
pub use types::{Colour, Map, TerrainKind, TileId, MAX_SEED};
