//! A* search over the zigzag grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::map::{self, Facing, MapNode};
use crate::passability::{PassabilityChecker, PathfindingMap};
use crate::route::Route;
use crate::NodeMap;

/// Cost multiplier applied to direct east/west movements.
///
/// Moving 2 tiles diagonally north-east (A -> C):
///
/// ```text
///           ,x
///         ,x C`x
///       ,x B`x'
///      x A`x'D`x
///       `x' `x'
/// ```
///
/// can be accomplished 2 different ways: A -> B -> C or A -> D -> C. Both
/// routes involve 2 movements, but it would look strange if the second were
/// chosen, because the diagonal route appears more logical and direct.
///
/// To ensure that the first route gets chosen, east and west movements are
/// considered slightly more expensive than other movements. Crucially, they
/// are still cheaper than 2 diagonal movements, so units will still move
/// directly east/west when it makes sense to do so.
const HORIZONTAL_MOVE_COST: f32 = 1.5;

/// A MapNode with an associated score for pathfinding.
///
/// The cost is the current best guess as to how short a path from start to
/// finish can be if it goes through this node: the cost from the start to
/// this node, plus the heuristic estimate of the cost from this node to the
/// goal.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ReachableNode {
    node: MapNode,
    cost: f32,
}

impl Eq for ReachableNode {}

impl Ord for ReachableNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Inverted so that BinaryHeap yields the cheapest node first.
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for ReachableNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Temporary object used in pathfinding.
///
/// All mutable search state lives here and is discarded once the route has
/// been produced, so every search starts from a clean slate.
struct Pathfinder<'a> {
    /// The starting node.
    start: MapNode,

    /// The destination node.
    goal: MapNode,

    /// The map used to find obstacles, etc.
    map: &'a dyn PathfindingMap,

    /// Object used to check for passability.
    passability_checker: &'a dyn PassabilityChecker,

    /// All discovered nodes, cheapest first.
    ///
    /// Finding a cheaper path to a node pushes a fresh entry rather than
    /// reordering the heap; superseded entries are skipped when popped.
    discovered_nodes: BinaryHeap<ReachableNode>,

    /// Map of node -> lowest known cost to reach that node from the start.
    cost_to_node: NodeMap<f32>,

    /// Map of node -> previous node in the shortest path found.
    prev_node: NodeMap<MapNode>,
}

impl<'a> Pathfinder<'a> {
    fn new(
        start: MapNode,
        goal: MapNode,
        map: &'a dyn PathfindingMap,
        passability_checker: &'a dyn PassabilityChecker,
    ) -> Pathfinder<'a> {
        Pathfinder {
            start,
            goal,
            map,
            passability_checker,
            discovered_nodes: BinaryHeap::new(),
            cost_to_node: NodeMap::default(),
            prev_node: NodeMap::default(),
        }
    }

    /// Attempts to find a path based on the Pathfinder's configuration.
    fn find_path(mut self) -> Vec<MapNode> {
        if self.start == self.goal {
            return vec![];
        }

        if !self
            .passability_checker
            .is_node_pathable(self.map, self.goal)
        {
            // Destination is unreachable
            return vec![];
        }

        self.discovered_nodes.push(ReachableNode {
            node: self.start,
            cost: self.estimate_cost_to_goal(self.start),
        });
        self.cost_to_node.insert(self.start, 0.0);

        while let Some(current) = self.discovered_nodes.pop() {
            // See if we've reached the goal
            if current.node == self.goal {
                return self.reconstruct_path(current.node);
            }

            // Skip entries superseded by a cheaper path to the same node.
            let best_estimate =
                self.get_cost_to_node(current.node) + self.estimate_cost_to_goal(current.node);
            if current.cost > best_estimate {
                continue;
            }

            for neighbor in self.find_neighbors(current.node) {
                let new_cost_to_neighbor = self.get_cost_to_node(current.node)
                    + self.get_movement_cost(current.node, neighbor);
                if new_cost_to_neighbor < self.get_cost_to_node(neighbor) {
                    // This path to neighbor is better than any previous one
                    self.cost_to_node.insert(neighbor, new_cost_to_neighbor);
                    self.prev_node.insert(neighbor, current.node);
                    self.update_path_to_node(neighbor, new_cost_to_neighbor);
                }
            }
        }

        // The goal could not be reached
        vec![]
    }

    /// Heuristic function used to estimate the cost from a MapNode to the
    /// goal.
    ///
    /// Octile-style: whatever distance x and y have in common can be covered
    /// diagonally, the rest in a straight line.
    fn estimate_cost_to_goal(&self, node: MapNode) -> f32 {
        let dx = (node.x - self.goal.x).abs();
        let dy = (node.y - self.goal.y).abs();

        let diagonal_distance = dx.min(dy);
        let remaining_distance = (dx - dy).abs();

        (diagonal_distance + remaining_distance) as f32
    }

    /// Returns the path found from the start to the given MapNode.
    fn reconstruct_path(&self, node: MapNode) -> Vec<MapNode> {
        let mut path = vec![];
        let mut current = node;

        // Follow the previous nodes back to the start
        while current != self.start {
            path.push(current);
            match self.prev_node.get(&current) {
                Some(&prev) => current = prev,
                // No previous node found. This should never happen since we
                // don't enter the loop for the start node.
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// Returns all traversable neighbors of the given MapNode.
    fn find_neighbors(&self, node: MapNode) -> Vec<MapNode> {
        let mut neighbors = map::find_neighbors(node, self.map);
        neighbors.retain(|&n| self.passability_checker.is_node_pathable(self.map, n));
        neighbors
    }

    /// Gets the cost of moving from the start to the given MapNode.
    ///
    /// Returns infinity if no path to the node has been found yet.
    fn get_cost_to_node(&self, node: MapNode) -> f32 {
        self.cost_to_node.get(&node).copied().unwrap_or(f32::INFINITY)
    }

    /// Gets the cost of moving to a neighboring tile.
    fn get_movement_cost(&self, from: MapNode, to: MapNode) -> f32 {
        match map::get_dir(from, to) {
            Facing::East | Facing::West => HORIZONTAL_MOVE_COST,
            _ => 1.0,
        }
    }

    /// Records a newly-found cheapest path to a node in the open set.
    fn update_path_to_node(&mut self, node: MapNode, new_cost: f32) {
        self.discovered_nodes.push(ReachableNode {
            node,
            cost: new_cost + self.estimate_cost_to_goal(node),
        });
    }
}

/// Attempts to find the lowest-cost route connecting `start` to `goal`.
///
/// The search reads the map through `passability_checker`, so the same map
/// can produce different routes for different kinds of movers. An empty
/// route is returned when the mover is already at the goal, when the goal
/// itself is not traversable, or when no connecting path exists.
///
/// ```
/// use zigzag_pathfinding::prelude::*;
///
/// let grid = PassabilityGrid::new(10, 10);
/// let mut route = find_path(
///     MapNode::new(0, 0),
///     MapNode::new(4, 0),
///     &grid,
///     &GroundPassability,
/// );
///
/// // Two direct east steps, each spanning 2 columns.
/// assert_eq!(route.pop(), Some(MapNode::new(2, 0)));
/// assert_eq!(route.pop(), Some(MapNode::new(4, 0)));
/// assert!(route.is_empty());
/// ```
pub fn find_path(
    start: MapNode,
    goal: MapNode,
    map: &dyn PathfindingMap,
    passability_checker: &dyn PassabilityChecker,
) -> Route {
    let path = Pathfinder::new(start, goal, map, passability_checker).find_path();
    #[cfg(feature = "log")]
    log::trace!(
        "path search {} -> {}: {} step(s)",
        start,
        goal,
        path.len()
    );
    Route::new(goal, path)
}
