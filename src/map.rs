//! The zigzag tile layout: nodes, directions, and neighbor enumeration.
//!
//! The map is indexed by a rectangular co-ordinate space, but alternating
//! columns are vertically offset by half a tile, forming a zigzag pattern
//! with hexagonal-like adjacency. Which tiles count as neighbors of a given
//! tile therefore depends on the parity of its column.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The co-ordinates of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapNode {
    /// Column of the tile.
    pub x: i32,
    /// Row of the tile.
    pub y: i32,
}

impl MapNode {
    /// Creates a MapNode from its co-ordinates.
    pub const fn new(x: i32, y: i32) -> MapNode {
        MapNode { x, y }
    }
}

impl Hash for MapNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Both co-ordinates fit comfortably in 32 bits, so packing them into
        // a single word gives a unique value for each node.
        state.write_u64(((self.x as u32 as u64) << 32) | self.y as u32 as u64);
    }
}

impl fmt::Display for MapNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Towards the bottom of the map (y increasing).
    South,
    /// Diagonally down-left.
    SouthWest,
    /// Towards the left edge of the map (x decreasing).
    West,
    /// Diagonally up-left.
    NorthWest,
    /// Towards the top of the map (y decreasing).
    North,
    /// Diagonally up-right.
    NorthEast,
    /// Towards the right edge of the map (x increasing).
    East,
    /// Diagonally down-right.
    SouthEast,
}

/// Interface exposing the map size.
pub trait MapBounds {
    /// Width of the map, in tiles.
    fn width(&self) -> i32;

    /// Height of the map, in tiles.
    fn height(&self) -> i32;

    /// Determines if a node lies within the map.
    fn contains(&self, node: MapNode) -> bool {
        node.x >= 0 && node.y >= 0 && node.x < self.width() && node.y < self.height()
    }
}

/// Tiles spanned by a direct east/west movement.
///
/// A full "tile width" step in the zigzag index space covers 2 columns; the
/// tiles 1 column away are the diagonal neighbors.
pub const EAST_WEST_TILE_SPAN: i32 = 2;

/// Determines if a tile is an "upper tile".
///
/// Each row of tiles is a zigzag, and the upper tiles are those that are
/// higher up the screen within the row.
pub fn is_upper_tile(x: i32) -> bool {
    x % 2 == 0
}

/// Determines if a tile is a "lower tile".
///
/// Each row of tiles is a zigzag, and the lower tiles are those that are
/// lower down the screen within the row.
pub fn is_lower_tile(x: i32) -> bool {
    x % 2 != 0
}

/// Neighbor offsets for upper tiles (even column), with the direction each
/// offset represents.
///
/// For an upper tile, the same-row tiles 1 column away sit half a tile lower
/// down the screen, so the *northern* diagonals are the ones a row above.
const UPPER_TILE_OFFSETS: [(i32, i32, Facing); 8] = [
    (0, -1, Facing::North),
    (1, -1, Facing::NorthEast),
    (EAST_WEST_TILE_SPAN, 0, Facing::East),
    (1, 0, Facing::SouthEast),
    (0, 1, Facing::South),
    (-1, 0, Facing::SouthWest),
    (-EAST_WEST_TILE_SPAN, 0, Facing::West),
    (-1, -1, Facing::NorthWest),
];

/// Neighbor offsets for lower tiles (odd column).
///
/// Mirror image of the upper-tile case: the *southern* diagonals are the
/// ones a row below.
const LOWER_TILE_OFFSETS: [(i32, i32, Facing); 8] = [
    (0, -1, Facing::North),
    (1, 0, Facing::NorthEast),
    (EAST_WEST_TILE_SPAN, 0, Facing::East),
    (1, 1, Facing::SouthEast),
    (0, 1, Facing::South),
    (-1, 1, Facing::SouthWest),
    (-EAST_WEST_TILE_SPAN, 0, Facing::West),
    (-1, 0, Facing::NorthWest),
];

fn neighbor_offsets(x: i32) -> &'static [(i32, i32, Facing); 8] {
    if is_upper_tile(x) {
        &UPPER_TILE_OFFSETS
    } else {
        &LOWER_TILE_OFFSETS
    }
}

/// Finds all valid neighbors of the given MapNode.
///
/// Returns at most 8 nodes, all within `bounds`. There is no wraparound at
/// the map edges.
pub fn find_neighbors(node: MapNode, bounds: &(impl MapBounds + ?Sized)) -> Vec<MapNode> {
    neighbor_offsets(node.x)
        .iter()
        .map(|&(dx, dy, _)| MapNode::new(node.x + dx, node.y + dy))
        .filter(|&n| bounds.contains(n))
        .collect()
}

/// Gets the most pertinent direction between 2 neighbouring tiles.
///
/// For example, if `to` is directly above `from`, this will return
/// [`Facing::North`].
///
/// If the MapNodes are identical, this returns South. Callers should only
/// pass truly adjacent pairs; for anything else the result is unspecified.
pub fn get_dir(from: MapNode, to: MapNode) -> Facing {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    neighbor_offsets(from.x)
        .iter()
        .find(|&&(ox, oy, _)| ox == dx && oy == dy)
        .map(|&(_, _, dir)| dir)
        .unwrap_or(Facing::South)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bounds(i32, i32);
    impl MapBounds for Bounds {
        fn width(&self) -> i32 {
            self.0
        }
        fn height(&self) -> i32 {
            self.1
        }
    }

    #[test]
    fn get_dir_from_even_column() {
        // We are in the top part of the zigzag;
        // => Moving to the row above is diagonally north.
        // => Moving to the *same* row is diagonally south.
        let start = MapNode::new(10, 10);

        assert_eq!(get_dir(start, MapNode::new(10, 9)), Facing::North);
        assert_eq!(get_dir(start, MapNode::new(10, 11)), Facing::South);
        assert_eq!(get_dir(start, MapNode::new(12, 10)), Facing::East);
        assert_eq!(get_dir(start, MapNode::new(8, 10)), Facing::West);
        assert_eq!(get_dir(start, MapNode::new(11, 9)), Facing::NorthEast);
        assert_eq!(get_dir(start, MapNode::new(9, 9)), Facing::NorthWest);
        assert_eq!(get_dir(start, MapNode::new(11, 10)), Facing::SouthEast);
        assert_eq!(get_dir(start, MapNode::new(9, 10)), Facing::SouthWest);
    }

    #[test]
    fn get_dir_from_odd_column() {
        // We are in the bottom part of the zigzag;
        // => Moving to the *same* row is diagonally north.
        // => Moving to the row below is diagonally south.
        let start = MapNode::new(11, 10);

        assert_eq!(get_dir(start, MapNode::new(11, 9)), Facing::North);
        assert_eq!(get_dir(start, MapNode::new(11, 11)), Facing::South);
        assert_eq!(get_dir(start, MapNode::new(13, 10)), Facing::East);
        assert_eq!(get_dir(start, MapNode::new(9, 10)), Facing::West);
        assert_eq!(get_dir(start, MapNode::new(12, 10)), Facing::NorthEast);
        assert_eq!(get_dir(start, MapNode::new(10, 10)), Facing::NorthWest);
        assert_eq!(get_dir(start, MapNode::new(12, 11)), Facing::SouthEast);
        assert_eq!(get_dir(start, MapNode::new(10, 11)), Facing::SouthWest);
    }

    #[test]
    fn get_dir_of_identical_nodes() {
        let node = MapNode::new(3, 7);
        assert_eq!(get_dir(node, node), Facing::South);
    }

    #[test]
    fn find_neighbors_away_from_edges() {
        let bounds = Bounds(20, 20);
        for &start in &[MapNode::new(10, 10), MapNode::new(11, 10)] {
            let neighbors = find_neighbors(start, &bounds);
            assert_eq!(neighbors.len(), 8);

            // Each neighbor must map back to a distinct direction.
            let mut facings: Vec<Facing> =
                neighbors.iter().map(|&n| get_dir(start, n)).collect();
            facings.sort_by_key(|&f| f as u8);
            facings.dedup();
            assert_eq!(facings.len(), 8);
        }
    }

    #[test]
    fn find_neighbors_clips_to_bounds() {
        let bounds = Bounds(5, 5);

        // Top-left corner: only East, SouthEast and South remain.
        let neighbors = find_neighbors(MapNode::new(0, 0), &bounds);
        assert_eq!(
            neighbors,
            vec![MapNode::new(2, 0), MapNode::new(1, 0), MapNode::new(0, 1)]
        );

        // Bottom edge (odd column): everything south of the row is clipped.
        let neighbors = find_neighbors(MapNode::new(3, 4), &bounds);
        assert_eq!(
            neighbors,
            vec![
                MapNode::new(3, 3),
                MapNode::new(4, 4),
                MapNode::new(1, 4),
                MapNode::new(2, 4)
            ]
        );
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let bounds = Bounds(8, 8);
        for x in 0..8 {
            for y in 0..8 {
                let node = MapNode::new(x, y);
                for neighbor in find_neighbors(node, &bounds) {
                    assert!(
                        find_neighbors(neighbor, &bounds).contains(&node),
                        "{} is a neighbor of {} but not vice versa",
                        neighbor,
                        node
                    );
                }
            }
        }
    }

    #[test]
    fn upper_and_lower_tiles() {
        assert!(is_upper_tile(0));
        assert!(is_upper_tile(10));
        assert!(is_lower_tile(1));
        assert!(is_lower_tile(11));
        assert!(!is_upper_tile(3));
        assert!(!is_lower_tile(4));
    }
}
