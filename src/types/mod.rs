//! Core domain types for genesis.
//!
//! This module contains the fundamental types used throughout the generator:
//! - `Colour` - RGBA colour values
//! - `TerrainKind` - Logical terrain and the fixed source-art palette
//! - `TileId` - The closed catalog of tile sprites
//! - `Map` - A validated grid of tiles

mod colour;
mod map;
mod terrain;
mod tile;

pub use colour::Colour;
pub use map::{Map, MAX_SEED};
pub use terrain::TerrainKind;
pub use tile::TileId;
