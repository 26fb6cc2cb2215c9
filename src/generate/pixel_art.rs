//! Map generation from pixel-art source images.
//!
//! Generation is two-pass: every pixel is classified first, so an
//! unsupported colour anywhere aborts before any tile is chosen; only then
//! is each cell resolved against the complete terrain grid.

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::{GenesisError, Result};
use crate::types::{Colour, Map, TerrainKind};

use super::adjacency::TerrainGrid;
use super::resolver::resolve_cell;

/// Seed recorded on maps derived from images.
pub const IMAGE_SEED: u64 = 0;

/// A rectangular grid of RGBA pixels.
pub trait PixelSource {
    /// Dimensions as (width, height).
    fn dimensions(&self) -> (u32, u32);

    /// Colour of the pixel at `(x, y)`; callers stay within `dimensions()`.
    fn pixel(&self, x: u32, y: u32) -> Colour;
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        (*self.get_pixel(x, y)).into()
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        self.get_pixel(x, y).into()
    }
}

/// Colour rows, mostly useful for building small inputs by hand.
impl PixelSource for Vec<Vec<Colour>> {
    fn dimensions(&self) -> (u32, u32) {
        let width = self.first().map_or(0, |row| row.len());
        if self.iter().any(|row| row.len() != width) {
            return (0, 0);
        }
        (
            u32::try_from(width).unwrap_or(0),
            u32::try_from(self.len()).unwrap_or(0),
        )
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        self.get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Colour::TRANSPARENT)
    }
}

/// Classify every pixel, scanning row-major and stopping at the first
/// unsupported colour.
pub fn classify_image<P: PixelSource + ?Sized>(image: &P) -> Result<TerrainGrid> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(GenesisError::InvalidImage {
            message: format!("image must have positive dimensions, got {}x{}", width, height),
        });
    }

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let kind = TerrainKind::classify(image.pixel(x, y), x as usize, y as usize)?;
            cells.push(kind);
        }
    }

    TerrainGrid::new(width as usize, height as usize, cells).ok_or_else(|| {
        GenesisError::InvalidImage {
            message: format!("pixel count does not match {}x{}", width, height),
        }
    })
}

/// Build a validated map from a terrain grid.
pub fn generate_from_grid(grid: &TerrainGrid) -> Result<Map> {
    let mut tiles = Vec::with_capacity(grid.height());
    for y in 0..grid.height() {
        let mut row = Vec::with_capacity(grid.width());
        for x in 0..grid.width() {
            let tile = resolve_cell(grid, x, y).ok_or_else(|| GenesisError::InvalidImage {
                message: format!("terrain grid has no cell at ({}, {})", x, y),
            })?;
            row.push(tile);
        }
        tiles.push(row);
    }

    Map::new(grid.width(), grid.height(), IMAGE_SEED, tiles)
}

/// Generate a map from a source image.
///
/// Fails with `InvalidImage` for an empty image and `UnsupportedColor` for
/// the first off-palette pixel (row-major). No partial map is ever returned.
pub fn generate_from_image<P: PixelSource + ?Sized>(image: &P) -> Result<Map> {
    let grid = classify_image(image)?;
    generate_from_grid(&grid)
}
