//! Autotiling rules: (terrain, neighbour mask) -> tile.
//!
//! Road cells are resolved against their road mask with a fixed priority:
//!
//! 1. crossing (all four neighbours)
//! 2. T-junction (three neighbours), named after the side opposite the gap
//! 3. corner (two orthogonal neighbours)
//! 4. straight fallback: east-west when only E/W bits are set, otherwise
//!    north-south (this includes isolated cells and dead ends)
//!
//! Grass cells are resolved against their sand mask. One transition sprite is
//! chosen with priority N > S > E > W. Sand cells always use plain sand.

use crate::types::{TerrainKind, TileId};

use super::adjacency::{AdjacencyMask, Direction, TerrainGrid};

/// The shape a road cell takes, before mapping to a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadShape {
    Crossing,
    /// Three-way junction; holds the one direction with no road.
    Junction { missing: Direction },
    /// Two orthogonal neighbours.
    Corner { vertical: Direction, horizontal: Direction },
    EastWest,
    NorthSouth,
}

/// One entry of the ordered road rule table.
struct RoadRule {
    name: &'static str,
    applies: fn(AdjacencyMask) -> Option<RoadShape>,
}

/// Road rules in priority order; the first that applies wins.
const ROAD_RULES: [RoadRule; 4] = [
    RoadRule {
        name: "crossing",
        applies: crossing,
    },
    RoadRule {
        name: "junction",
        applies: junction,
    },
    RoadRule {
        name: "corner",
        applies: corner,
    },
    RoadRule {
        name: "straight",
        applies: straight,
    },
];

fn crossing(mask: AdjacencyMask) -> Option<RoadShape> {
    (mask == AdjacencyMask::ALL).then_some(RoadShape::Crossing)
}

fn junction(mask: AdjacencyMask) -> Option<RoadShape> {
    if mask.count() != 3 {
        return None;
    }
    Direction::ALL
        .into_iter()
        .find(|&dir| !mask.contains(dir))
        .map(|missing| RoadShape::Junction { missing })
}

fn corner(mask: AdjacencyMask) -> Option<RoadShape> {
    if mask.count() != 2 {
        return None;
    }
    let vertical = [Direction::North, Direction::South]
        .into_iter()
        .find(|&dir| mask.contains(dir))?;
    let horizontal = [Direction::East, Direction::West]
        .into_iter()
        .find(|&dir| mask.contains(dir))?;
    Some(RoadShape::Corner {
        vertical,
        horizontal,
    })
}

fn straight(mask: AdjacencyMask) -> Option<RoadShape> {
    let horizontal = mask.contains(Direction::East) || mask.contains(Direction::West);
    let vertical = mask.contains(Direction::North) || mask.contains(Direction::South);
    if horizontal && !vertical {
        Some(RoadShape::EastWest)
    } else {
        Some(RoadShape::NorthSouth)
    }
}

impl RoadShape {
    /// Classify a road mask, returning the shape and the name of the rule
    /// that produced it.
    pub(crate) fn classify_with_rule(mask: AdjacencyMask) -> (RoadShape, &'static str) {
        for rule in &ROAD_RULES {
            if let Some(shape) = (rule.applies)(mask) {
                return (shape, rule.name);
            }
        }
        // The straight rule always applies.
        (RoadShape::NorthSouth, "straight")
    }

    pub fn classify(mask: AdjacencyMask) -> RoadShape {
        Self::classify_with_rule(mask).0
    }

    /// Sprite for this shape.
    pub fn tile(self) -> TileId {
        use Direction::{East, North, South, West};

        match self {
            RoadShape::Crossing => TileId::RoadCrossing,
            RoadShape::Junction { missing: South } => TileId::RoadSplitN,
            RoadShape::Junction { missing: North } => TileId::RoadSplitS,
            RoadShape::Junction { missing: West } => TileId::RoadSplitE,
            RoadShape::Junction { missing: East } => TileId::RoadSplitW,
            RoadShape::Corner {
                vertical: North,
                horizontal: East,
            } => TileId::RoadCornerUR,
            RoadShape::Corner {
                vertical: South,
                horizontal: East,
            } => TileId::RoadCornerLR,
            RoadShape::Corner {
                vertical: South,
                horizontal: West,
            } => TileId::RoadCornerLL,
            RoadShape::Corner { .. } => TileId::RoadCornerUL,
            RoadShape::EastWest => TileId::RoadEast,
            RoadShape::NorthSouth => TileId::RoadNorth,
        }
    }
}

/// Resolve a road cell from its road-neighbour mask.
pub fn road_tile(mask: AdjacencyMask) -> TileId {
    RoadShape::classify(mask).tile()
}

/// Resolve a grass cell from its sand-neighbour mask.
pub fn grass_tile(sand: AdjacencyMask) -> TileId {
    const PRIORITY: [(Direction, TileId); 4] = [
        (Direction::North, TileId::GrassTransitionN),
        (Direction::South, TileId::GrassTransitionS),
        (Direction::East, TileId::GrassTransitionE),
        (Direction::West, TileId::GrassTransitionW),
    ];

    PRIORITY
        .into_iter()
        .find(|&(dir, _)| sand.contains(dir))
        .map_or(TileId::Grass1, |(_, tile)| tile)
}

/// Resolve the tile for one cell of a classified grid.
///
/// Returns `None` only for coordinates outside the grid.
pub fn resolve_cell(grid: &TerrainGrid, x: usize, y: usize) -> Option<TileId> {
    let tile = match grid.get(x, y)? {
        TerrainKind::Grass => grass_tile(grid.neighbour_mask(x, y, TerrainKind::Sand)),
        TerrainKind::Sand => TileId::Sand1,
        TerrainKind::Road => road_tile(grid.neighbour_mask(x, y, TerrainKind::Road)),
    };
    Some(tile)
}
