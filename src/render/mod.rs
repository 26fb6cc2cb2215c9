//! Output for generated maps.
//!
//! This module handles writing maps to their JSON wire format and composing
//! preview images from sprites or swatches.

mod json;
mod preview;

pub use json::{map_to_json, parse_map_json, read_map_json, write_map_json};
pub use preview::{render_preview, visual_path_for, write_preview, TileArt};
