//! Visual previews of generated maps.
//!
//! A preview places one `tile_size` square per map cell. Cells are drawn
//! either from real sprites (`<dir>/<tile-id>.png`) or, when no sprite
//! directory is configured, from flat swatches that still show terrain,
//! transition edges and road shapes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{imageops, ImageFormat, Rgba, RgbaImage};

use crate::error::{GenesisError, Result};
use crate::generate::Direction;
use crate::types::{Colour, Map, TerrainKind, TileId};

use super::json::{commit_tmp, ensure_parent, tmp_path_for};

/// Largest preview canvas, in pixels (1 GiB of RGBA).
const MAX_PREVIEW_PIXELS: u64 = 1 << 28;

/// Where tile artwork comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileArt {
    /// Flat colour swatches, no files needed.
    Swatches,
    /// A directory of `<tile-id>.png` sprites.
    Sprites(PathBuf),
}

/// Derive the preview path for a JSON output path.
///
/// `out/level-01.json` becomes `out/level-01.visual.png`; an output with no
/// file stem falls back to `map.visual.png`.
pub fn visual_path_for(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("map");
    let file_name = format!("{}.visual.png", stem);
    match json_path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Compose a preview image of `map`.
pub fn render_preview(map: &Map, tile_size: u32, art: &TileArt) -> Result<RgbaImage> {
    if tile_size == 0 {
        return Err(GenesisError::Build {
            message: "Preview tile size must be at least 1".to_string(),
            help: Some("Set tile_size in genesis.yaml or pass --tile-size".to_string()),
        });
    }

    let canvas_w = dimension(map.width(), tile_size)?;
    let canvas_h = dimension(map.height(), tile_size)?;
    let pixels = u64::from(canvas_w) * u64::from(canvas_h);
    if pixels > MAX_PREVIEW_PIXELS {
        return Err(GenesisError::Build {
            message: format!(
                "Preview of {}x{} tiles at {}px would be {}x{} pixels",
                map.width(),
                map.height(),
                tile_size,
                canvas_w,
                canvas_h
            ),
            help: Some("Use a smaller tile size or pass --no-preview".to_string()),
        });
    }
    let mut canvas = RgbaImage::new(canvas_w, canvas_h);

    // Each distinct tile is drawn or loaded once.
    let mut cache: HashMap<TileId, RgbaImage> = HashMap::new();

    for (x, y, tile) in map.iter_tiles() {
        if !cache.contains_key(&tile) {
            let source = match art {
                TileArt::Swatches => swatch(tile, tile_size),
                TileArt::Sprites(dir) => load_sprite(dir, tile, tile_size)?,
            };
            cache.insert(tile, source);
        }
        if let Some(source) = cache.get(&tile) {
            let dx = i64::from(tile_size) * x as i64;
            let dy = i64::from(tile_size) * y as i64;
            imageops::replace(&mut canvas, source, dx, dy);
        }
    }

    Ok(canvas)
}

/// Write a preview PNG atomically.
pub fn write_preview(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let tmp = tmp_path_for(path);
    image
        .save_with_format(&tmp, ImageFormat::Png)
        .map_err(|e| GenesisError::Io {
            path: tmp.clone(),
            message: format!("Failed to write preview PNG: {}", e),
        })?;
    commit_tmp(&tmp, path)
}

fn dimension(cells: usize, tile_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(tile_size))
        .ok_or_else(|| GenesisError::Build {
            message: format!("Preview of {} tiles at {}px is too large", cells, tile_size),
            help: Some("Use a smaller tile size".to_string()),
        })
}

/// Load `<dir>/<tile-id>.png`, which must be exactly `tile_size` square.
fn load_sprite(dir: &Path, tile: TileId, tile_size: u32) -> Result<RgbaImage> {
    let path = dir.join(format!("{}.png", tile.as_str()));
    if !path.exists() {
        return Err(GenesisError::Build {
            message: format!("No sprite for tile '{}' at {}", tile, path.display()),
            help: Some("Add the sprite or render the preview without a sprite directory".to_string()),
        });
    }
    let sprite = image::open(&path)
        .map_err(|e| GenesisError::Io {
            path: path.clone(),
            message: format!("Failed to decode sprite: {}", e),
        })?
        .to_rgba8();
    if sprite.dimensions() != (tile_size, tile_size) {
        return Err(GenesisError::Build {
            message: format!(
                "Sprite '{}' is {}x{}, expected {}x{}",
                tile,
                sprite.width(),
                sprite.height(),
                tile_size,
                tile_size
            ),
            help: Some("All sprites must share the preview tile size".to_string()),
        });
    }
    Ok(sprite)
}

fn base_colour(tile: TileId) -> Colour {
    let shade = Colour::BLACK;
    match tile {
        TileId::Grass2 => TerrainKind::Grass.colour().mix(shade, 0.45),
        TileId::Sand1 => TerrainKind::Sand.colour().mix(shade, 0.2),
        _ => TerrainKind::Grass.colour().mix(shade, 0.35),
    }
}

/// Directions a road sprite connects to.
fn road_arms(tile: TileId) -> &'static [Direction] {
    use Direction::{East, North, South, West};

    match tile {
        TileId::RoadCrossing => &[North, East, South, West],
        TileId::RoadSplitN => &[North, East, West],
        TileId::RoadSplitS => &[East, South, West],
        TileId::RoadSplitE => &[North, East, South],
        TileId::RoadSplitW => &[North, South, West],
        TileId::RoadCornerUR => &[North, East],
        TileId::RoadCornerLR => &[East, South],
        TileId::RoadCornerLL => &[South, West],
        TileId::RoadCornerUL => &[North, West],
        TileId::RoadEast => &[East, West],
        TileId::RoadNorth => &[North, South],
        _ => &[],
    }
}

fn transition_edge(tile: TileId) -> Option<Direction> {
    match tile {
        TileId::GrassTransitionN => Some(Direction::North),
        TileId::GrassTransitionS => Some(Direction::South),
        TileId::GrassTransitionE => Some(Direction::East),
        TileId::GrassTransitionW => Some(Direction::West),
        _ => None,
    }
}

/// Draw a flat swatch for a tile.
fn swatch(tile: TileId, size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, base_colour(tile).into());
    let band = (size / 4).max(1);

    if let Some(edge) = transition_edge(tile) {
        let sand: Rgba<u8> = TerrainKind::Sand.colour().mix(Colour::BLACK, 0.2).into();
        let (x0, y0, x1, y1) = match edge {
            Direction::North => (0, 0, size, band),
            Direction::South => (0, size - band, size, size),
            Direction::East => (size - band, 0, size, size),
            Direction::West => (0, 0, band, size),
        };
        fill(&mut img, (x0, y0, x1, y1), sand);
    }

    if tile.terrain() == TerrainKind::Road {
        let road: Rgba<u8> = Colour::rgb(0x3A, 0x3A, 0x3A).into();
        let lo = (size - band) / 2;
        let hi = lo + band;
        fill(&mut img, (lo, lo, hi, hi), road);
        for dir in road_arms(tile) {
            let rect = match dir {
                Direction::North => (lo, 0, hi, hi),
                Direction::South => (lo, lo, hi, size),
                Direction::East => (lo, lo, size, hi),
                Direction::West => (0, lo, hi, hi),
            };
            fill(&mut img, rect, road);
        }
    }

    img
}

fn fill(img: &mut RgbaImage, (x0, y0, x1, y1): (u32, u32, u32, u32), colour: Rgba<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, colour);
        }
    }
}
