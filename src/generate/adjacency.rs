//! Terrain grids and 4-connected neighbour masks.

use std::fmt;

use crate::types::TerrainKind;

/// A cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Directions in mask bit order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Mask bit for this direction (N=1, E=2, S=4, W=8).
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    /// Step from `(x, y)` one cell in this direction, if it stays inside a
    /// `width` x `height` grid.
    fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Direction::North => y.checked_sub(1).map(|ny| (x, ny)),
            Direction::East => x.checked_add(1).filter(|&nx| nx < width).map(|nx| (nx, y)),
            Direction::South => y.checked_add(1).filter(|&ny| ny < height).map(|ny| (x, ny)),
            Direction::West => x.checked_sub(1).map(|nx| (nx, y)),
        }
    }
}

/// Which of the four neighbours of a cell share a queried terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdjacencyMask(u8);

impl AdjacencyMask {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    /// Build a mask from raw bits; anything above the low four bits is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn from_directions(directions: &[Direction]) -> Self {
        directions
            .iter()
            .fold(Self::EMPTY, |mask, &dir| mask.with(dir))
    }

    pub const fn with(self, dir: Direction) -> Self {
        Self(self.0 | dir.bit())
    }

    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Number of set directions.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Set directions in N, E, S, W order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// Every possible mask, from `0b0000` to `0b1111`.
    pub fn all_masks() -> impl Iterator<Item = AdjacencyMask> {
        (0u8..16).map(Self::from_bits)
    }
}

impl fmt::Display for AdjacencyMask {
    /// Formats as `NESW` with `-` for clear bits, e.g. `N-S-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dir, letter) in Direction::ALL.into_iter().zip(['N', 'E', 'S', 'W']) {
            let c = if self.contains(dir) { letter } else { '-' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A fully classified, rectangular grid of terrain (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Create a grid from row-major cells.
    ///
    /// Returns `None` unless `cells.len() == width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<TerrainKind>) -> Option<Self> {
        (width.checked_mul(height) == Some(cells.len())).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from rows of terrain. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<TerrainKind>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Terrain at a cell, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<TerrainKind> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Terrain of the neighbour in `dir`, or `None` past the grid edge.
    pub fn neighbour(&self, x: usize, y: usize, dir: Direction) -> Option<TerrainKind> {
        let (nx, ny) = dir.step(x, y, self.width, self.height)?;
        self.get(nx, ny)
    }

    /// Mask of the neighbours of `(x, y)` whose terrain is `kind`.
    ///
    /// `kind` need not match the cell's own terrain. Neighbours outside the
    /// grid never match.
    pub fn neighbour_mask(&self, x: usize, y: usize, kind: TerrainKind) -> AdjacencyMask {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.neighbour(x, y, dir) == Some(kind))
            .fold(AdjacencyMask::EMPTY, AdjacencyMask::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TerrainKind::{Grass as G, Road as R, Sand as S};

    #[test]
    fn test_mask_bits() {
        let mask = AdjacencyMask::from_directions(&[Direction::North, Direction::West]);
        assert_eq!(mask.bits(), 0b1001);
        assert!(mask.contains(Direction::North));
        assert!(!mask.contains(Direction::East));
        assert_eq!(mask.count(), 2);
        assert_eq!(AdjacencyMask::from_bits(0xFF), AdjacencyMask::ALL);
    }

    #[test]
    fn test_mask_display() {
        assert_eq!(AdjacencyMask::EMPTY.to_string(), "----");
        assert_eq!(AdjacencyMask::from_bits(0b0101).to_string(), "N-S-");
        assert_eq!(AdjacencyMask::ALL.to_string(), "NESW");
    }

    #[test]
    fn test_all_masks() {
        let masks: Vec<_> = AdjacencyMask::all_masks().collect();
        assert_eq!(masks.len(), 16);
        assert_eq!(masks[0], AdjacencyMask::EMPTY);
        assert_eq!(masks[15], AdjacencyMask::ALL);
    }

    #[test]
    fn test_grid_shape_checks() {
        assert!(TerrainGrid::new(2, 2, vec![G; 3]).is_none());
        assert!(TerrainGrid::from_rows(vec![vec![G, G], vec![G]]).is_none());
        let grid = TerrainGrid::from_rows(vec![vec![G, S], vec![R, G]]).unwrap();
        assert_eq!(grid.get(1, 0), Some(S));
        assert_eq!(grid.get(0, 1), Some(R));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_neighbour_mask_centre() {
        let grid = TerrainGrid::from_rows(vec![
            vec![G, R, G],
            vec![S, R, R],
            vec![G, G, G],
        ])
        .unwrap();

        assert_eq!(grid.neighbour_mask(1, 1, R).bits(), 0b0011);
        assert_eq!(grid.neighbour_mask(1, 1, S).bits(), 0b1000);
        assert_eq!(grid.neighbour_mask(1, 1, G).bits(), 0b0100);
    }

    #[test]
    fn test_neighbour_mask_edges_never_match() {
        let grid = TerrainGrid::from_rows(vec![vec![R]]).unwrap();
        assert_eq!(grid.neighbour_mask(0, 0, R), AdjacencyMask::EMPTY);

        let grid = TerrainGrid::from_rows(vec![vec![R, R], vec![R, R]]).unwrap();
        assert_eq!(grid.neighbour_mask(0, 0, R).bits(), 0b0110);
        assert_eq!(grid.neighbour_mask(1, 1, R).bits(), 0b1001);
    }

    #[test]
    fn test_neighbour_mask_cross_kind() {
        // Grass cell probing for sand on every side.
        let grid = TerrainGrid::from_rows(vec![
            vec![G, S, G],
            vec![S, G, S],
            vec![G, S, G],
        ])
        .unwrap();
        assert_eq!(grid.neighbour_mask(1, 1, S), AdjacencyMask::ALL);
        assert_eq!(grid.neighbour_mask(1, 1, G), AdjacencyMask::EMPTY);
    }
}
