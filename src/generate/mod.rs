//! Map generators.
//!
//! Two independent producers of a validated [`Map`](crate::types::Map):
//! - [`generate_from_image`] autotiles a pixel-art source image
//! - [`generate_grass_map`] scatters grass variants from a seed
//!
//! Both are pure functions of their inputs and safe to call from any thread.

mod adjacency;
mod grass;
mod pixel_art;
mod resolver;

pub use adjacency::{AdjacencyMask, Direction, TerrainGrid};
pub use grass::generate_grass_map;
pub use pixel_art::{classify_image, generate_from_grid, generate_from_image, PixelSource, IMAGE_SEED};
pub use resolver::{grass_tile, resolve_cell, road_tile, RoadShape};
