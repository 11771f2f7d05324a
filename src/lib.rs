#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A* pathfinding on zigzag-offset tile grids.
//!
//! ## Introduction
//! Some tile-based games index their world with a rectangular co-ordinate
//! space in which alternating columns are vertically offset by half a tile,
//! producing a diamond-shaped "zigzag" layout with hexagonal-like adjacency.
//! On such a grid the usual square-lattice assumptions break down: which
//! tiles neighbor a given tile depends on the parity of its column, a direct
//! east or west step spans *2* columns, and the tiles 1 column away are the
//! diagonal neighbors.
//!
//! This crate implements the geometry of that layout (neighbor enumeration
//! and direction classification, keyed by column parity) and an A* search
//! over it. The search reads the world through two small interfaces:
//! [`PathfindingMap`] for tile classification, and [`PassabilityChecker`]
//! for collapsing it to a yes/no answer per mover. It can therefore be
//! dropped onto any map representation that can answer "what is at (x, y)?".
//!
//! Direct east/west steps are charged 1.5 instead of 1.0. They cover the
//! same 2-column displacement as two diagonal steps (cost 2.0), so this
//! keeps straight runs preferred over diagonal zigzagging while still
//! charging them more than a single ordinary step.
//!
//! ## Examples
//! Finding a route on a small map:
//! ```
//! use zigzag_pathfinding::prelude::*;
//!
//! let mut grid = PassabilityGrid::new(10, 10);
//! grid.set_passability(MapNode::new(2, 0), TilePassability::Building);
//!
//! let route = find_path(
//!     MapNode::new(0, 0),
//!     MapNode::new(4, 0),
//!     &grid,
//!     &GroundPassability,
//! );
//!
//! // The route skirts the building and ends at the goal.
//! assert!(!route.is_empty());
//! assert_eq!(route.iter().last(), Some(&MapNode::new(4, 0)));
//! ```
//!
//! An empty route means there is nothing to do: the mover is already at the
//! goal, or the goal cannot be reached:
//! ```
//! use zigzag_pathfinding::prelude::*;
//!
//! let mut grid = PassabilityGrid::new(10, 10);
//! grid.set_passability(MapNode::new(5, 5), TilePassability::Building);
//!
//! let route = find_path(
//!     MapNode::new(0, 0),
//!     MapNode::new(5, 5),
//!     &grid,
//!     &GroundPassability,
//! );
//! assert!(route.is_empty());
//! ```
//!
//! Different movers can share the same map:
//! ```
//! use zigzag_pathfinding::prelude::*;
//!
//! let mut grid = PassabilityGrid::new(10, 10);
//! for y in 0..10 {
//!     grid.set_passability(MapNode::new(4, y), TilePassability::GroundUnit);
//!     grid.set_passability(MapNode::new(5, y), TilePassability::GroundUnit);
//! }
//!
//! let start = MapNode::new(0, 5);
//! let goal = MapNode::new(8, 5);
//!
//! // Ground units are walled off, flyers pass straight over.
//! assert!(find_path(start, goal, &grid, &GroundPassability).is_empty());
//! assert!(!find_path(start, goal, &grid, &FlyingPassability).is_empty());
//! ```

mod map;
mod passability;
mod pathfinder;
mod route;

pub use self::map::{
    find_neighbors, get_dir, is_lower_tile, is_upper_tile, Facing, MapBounds, MapNode,
    EAST_WEST_TILE_SPAN,
};
pub use self::passability::{
    FlyingPassability, GroundPassability, PassabilityChecker, PassabilityGrid, PathfindingMap,
    TilePassability,
};
pub use self::pathfinder::find_path;
pub use self::route::Route;

/// The most common imports, bundled for convenience.
pub mod prelude {
    pub use crate::{
        find_neighbors, find_path, get_dir, Facing, FlyingPassability, GroundPassability,
        MapBounds, MapNode, PassabilityChecker, PassabilityGrid, PathfindingMap, Route,
        TilePassability,
    };
}

pub(crate) type NodeMap<V> = hashbrown::HashMap<MapNode, V>;
