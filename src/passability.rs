//! Map data and traversability, as seen by the pathfinder.
//!
//! The pathfinder never owns the map. It reads tile classifications through
//! the [`PathfindingMap`] interface and collapses them to a yes/no answer
//! with a [`PassabilityChecker`] supplied by the caller, so different kinds
//! of movers can share one map.

use crate::map::{MapBounds, MapNode};

/// How a tile is currently occupied, for traversability purposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TilePassability {
    /// Nothing obstructs the tile.
    #[default]
    Clear,
    /// A building occupies the tile.
    Building,
    /// A ground unit occupies the tile.
    GroundUnit,
    /// A flying unit occupies the airspace above the tile.
    FlyingUnit,
}

/// Interface exposing read-only map data for pathfinding.
pub trait PathfindingMap: MapBounds {
    /// The current passability of the tile at `node`.
    fn passability(&self, node: MapNode) -> TilePassability;
}

/// Decides whether tiles can be traversed by a particular kind of mover.
///
/// Implementations collapse the full [`TilePassability`] classification down
/// to a single yes/no answer. Closures of the right shape can be used
/// directly:
///
/// ```
/// use zigzag_pathfinding::{MapNode, PassabilityChecker, PathfindingMap, TilePassability};
///
/// let only_clear = |map: &dyn PathfindingMap, node: MapNode| {
///     map.passability(node) == TilePassability::Clear
/// };
/// # fn assert_checker(_: &impl PassabilityChecker) {}
/// # assert_checker(&only_clear);
/// ```
pub trait PassabilityChecker {
    /// Determines if `node` can currently be traversed on `map`.
    fn is_node_pathable(&self, map: &dyn PathfindingMap, node: MapNode) -> bool;
}

impl<F> PassabilityChecker for F
where
    F: Fn(&dyn PathfindingMap, MapNode) -> bool,
{
    fn is_node_pathable(&self, map: &dyn PathfindingMap, node: MapNode) -> bool {
        self(map, node)
    }
}

/// Passability rules for ground-based movers: only clear tiles can be
/// entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroundPassability;

impl PassabilityChecker for GroundPassability {
    fn is_node_pathable(&self, map: &dyn PathfindingMap, node: MapNode) -> bool {
        map.passability(node) == TilePassability::Clear
    }
}

/// Passability rules for flying movers: buildings and ground units are
/// passed over, only other flyers block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlyingPassability;

impl PassabilityChecker for FlyingPassability {
    fn is_node_pathable(&self, map: &dyn PathfindingMap, node: MapNode) -> bool {
        map.passability(node) != TilePassability::FlyingUnit
    }
}

/// A straightforward tile store implementing [`PathfindingMap`].
///
/// Games that keep their world data elsewhere can implement
/// [`PathfindingMap`] on their own types instead; this grid exists so that
/// the crate is usable (and testable) on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassabilityGrid {
    width: i32,
    height: i32,
    tiles: Vec<TilePassability>,
}

impl PassabilityGrid {
    /// Creates a grid of the given size with every tile clear.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative.
    pub fn new(width: i32, height: i32) -> PassabilityGrid {
        assert!(width >= 0 && height >= 0, "grid dimensions must not be negative");
        PassabilityGrid {
            width,
            height,
            tiles: vec![TilePassability::Clear; (width * height) as usize],
        }
    }

    /// Creates a grid from existing tile data, laid out row by row.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` does not contain exactly `width * height` entries.
    pub fn with_tiles(width: i32, height: i32, tiles: Vec<TilePassability>) -> PassabilityGrid {
        assert!(width >= 0 && height >= 0, "grid dimensions must not be negative");
        assert_eq!(
            tiles.len(),
            (width * height) as usize,
            "tile data does not match the grid dimensions"
        );
        PassabilityGrid { width, height, tiles }
    }

    /// Overwrites the passability of the tile at `node`.
    ///
    /// Out-of-bounds nodes are ignored.
    pub fn set_passability(&mut self, node: MapNode, passability: TilePassability) {
        if let Some(index) = self.index(node) {
            self.tiles[index] = passability;
        }
    }

    fn index(&self, node: MapNode) -> Option<usize> {
        self.contains(node)
            .then(|| (node.y * self.width + node.x) as usize)
    }
}

impl MapBounds for PassabilityGrid {
    fn width(&self) -> i32 {
        self.width
    }
    fn height(&self) -> i32 {
        self.height
    }
}

impl PathfindingMap for PassabilityGrid {
    /// Out-of-bounds nodes report [`TilePassability::Building`], so they are
    /// never pathable.
    fn passability(&self, node: MapNode) -> TilePassability {
        self.index(node)
            .map(|i| self.tiles[i])
            .unwrap_or(TilePassability::Building)
    }
}
