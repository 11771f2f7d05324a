//! The route produced by a path search.

use std::collections::VecDeque;
use std::fmt;

use crate::map::MapNode;

/// An ordered list of tiles leading to a destination.
///
/// The path starts *after* the mover's current tile and ends with the goal,
/// so it is consumed one step at a time via [`pop`](Route::pop). An empty
/// route means there is nothing to do: either the mover is already at the
/// destination, or no way of reaching it was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    destination: MapNode,
    path: VecDeque<MapNode>,
}

impl Route {
    /// Creates a Route from a destination and the steps leading to it.
    pub fn new(destination: MapNode, path: Vec<MapNode>) -> Route {
        Route {
            destination,
            path: VecDeque::from(path),
        }
    }

    /// The tile this route leads to.
    ///
    /// Retained even when the path is empty, so callers can still tell what
    /// the search was aiming for.
    pub fn destination(&self) -> MapNode {
        self.destination
    }

    /// Determines if there are any steps left to take.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The number of steps remaining.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Removes and returns the next step of the route.
    pub fn pop(&mut self) -> Option<MapNode> {
        self.path.pop_front()
    }

    /// The next step of the route, without consuming it.
    pub fn peek(&self) -> Option<MapNode> {
        self.path.front().copied()
    }

    /// Returns an Iterator over the remaining steps.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, MapNode> {
        self.path.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Route to {}: ", self.destination)?;
        if self.path.is_empty() {
            write!(f, "<empty>")
        } else {
            write!(f, "{}", self.path[0])?;
            for node in self.path.iter().skip(1) {
                write!(f, " -> {}", node)?;
            }
            Ok(())
        }
    }
}
