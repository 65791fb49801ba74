//! Per-cell search records and the [`NodeStore`] arena.
//!
//! Every cell owns exactly one [`Node`] record for the lifetime of a
//! search. The open list never copies records; it holds coordinates and
//! looks the records up here. Parent links are coordinates too, so a
//! parent chain can never dangle — at worst it fails to terminate, which
//! the path walk detects.

use std::fmt;

use gridpath_core::Coord;

use crate::cost::Cost;

/// The cell-local search state machine.
///
/// `Unexplored → Open → Closed → Open → …` during the search proper;
/// `Result`, `Start` and `Goal` are cosmetic annotations applied during
/// path extraction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Unexplored,
    Open,
    Closed,
    Result,
    Start,
    Goal,
}

/// One cell's search bookkeeping.
///
/// `g` is the accumulated cost from the start, `f` the open-list priority
/// (`g` plus heuristic). Both hold the [`Cost`] maximum until the cell is
/// first opened. `parent` is the predecessor on the best known path; the
/// start cell is its own parent (the fixed point the path walk stops at).
#[derive(Debug, Clone)]
pub struct Node<C> {
    pub state: NodeState,
    pub g: C,
    pub f: C,
    pub parent: Coord,
    pub coord: Coord,
}

impl<C: Cost> Node<C> {
    fn fresh(coord: Coord) -> Self {
        Self {
            state: NodeState::Unexplored,
            g: C::max_value(),
            f: C::max_value(),
            parent: coord,
            coord,
        }
    }
}

impl<C: Cost> fmt::Display for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} g={:?} f={:?} parent={}",
            self.coord, self.state, self.g, self.f, self.parent
        )
    }
}

/// Coordinate-addressed arena of [`Node`] records.
///
/// All records are allocated eagerly at construction; a fresh search over
/// the same grid requires [`reset`](NodeStore::reset).
#[derive(Debug, Clone)]
pub struct NodeStore<C> {
    width: i32,
    height: i32,
    nodes: Vec<Node<C>>,
}

impl<C: Cost> NodeStore<C> {
    /// Allocate one `Unexplored` record per cell.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut nodes = Vec::with_capacity((w as usize) * (h as usize));
        for y in 0..h {
            for x in 0..w {
                nodes.push(Node::fresh(Coord::new(x, y)));
            }
        }
        Self {
            width: w,
            height: h,
            nodes,
        }
    }

    /// Number of records (W×H).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        if c.x < 0 || c.x >= self.width || c.y < 0 || c.y >= self.height {
            panic!("coordinate {c} outside {}x{} store", self.width, self.height);
        }
        (c.y as usize) * (self.width as usize) + c.x as usize
    }

    /// The record for `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the grid bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> &Node<C> {
        &self.nodes[self.index(c)]
    }

    /// Mutable access to the record for `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the grid bounds.
    #[inline]
    pub fn node_mut(&mut self, c: Coord) -> &mut Node<C> {
        let i = self.index(c);
        &mut self.nodes[i]
    }

    /// Return every record to its initial `Unexplored` state.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            *n = Node::fresh(n.coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_records_are_unexplored_self_parented() {
        let store: NodeStore<f64> = NodeStore::new(3, 2);
        assert_eq!(store.len(), 6);
        let c = Coord::new(2, 1);
        let n = store.node(c);
        assert_eq!(n.state, NodeState::Unexplored);
        assert_eq!(n.coord, c);
        assert_eq!(n.parent, c);
        assert_eq!(n.g, f64::MAX);
    }

    #[test]
    fn mutation_round_trips() {
        let mut store: NodeStore<i32> = NodeStore::new(2, 2);
        let c = Coord::new(1, 0);
        {
            let n = store.node_mut(c);
            n.state = NodeState::Open;
            n.g = 4;
            n.f = 9;
            n.parent = Coord::new(0, 0);
        }
        let n = store.node(c);
        assert_eq!(n.state, NodeState::Open);
        assert_eq!(n.g, 4);
        assert_eq!(n.f, 9);
        assert_eq!(n.parent, Coord::new(0, 0));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut store: NodeStore<i32> = NodeStore::new(2, 2);
        let c = Coord::new(0, 1);
        store.node_mut(c).state = NodeState::Closed;
        store.node_mut(c).g = 3;
        store.node_mut(c).parent = Coord::new(1, 1);

        store.reset();

        let n = store.node(c);
        assert_eq!(n.state, NodeState::Unexplored);
        assert_eq!(n.g, i32::MAX);
        assert_eq!(n.parent, c);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_lookup_panics() {
        let store: NodeStore<f64> = NodeStore::new(2, 2);
        store.node(Coord::new(2, 0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_state_round_trip() {
        for state in [
            NodeState::Unexplored,
            NodeState::Open,
            NodeState::Closed,
            NodeState::Result,
            NodeState::Start,
            NodeState::Goal,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let back: NodeState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, back);
        }
    }
}
