//! The [`GridGraph`] façade — a weighted graph over a 2-D tile map with
//! built-in search bookkeeping.
//!
//! All frontier and node-state mutation is funnelled through the
//! [`SearchGraph`] impl here; the matrix, store and open list are never
//! exposed mutably. One `GridGraph` supports one search at a time; call
//! [`reset`](GridGraph::reset) before reusing it.

use log::debug;

use gridpath_core::Coord;

use crate::cost::{Cost, diagonal_weight, straight_weight};
use crate::error::GridError;
use crate::matrix::VertexMatrix;
use crate::node::{Node, NodeState, NodeStore};
use crate::queue::OpenList;
use crate::stats::SearchStats;
use crate::traits::{Edge, SearchGraph};

/// A square-tile grid map with per-cell search state.
///
/// Diagonal movement is enabled per graph at construction. Edge costs are
/// `terrain_weight(to) * step_weight(from, to)`, with the step weight
/// determined by whether the move is axis-aligned or diagonal.
#[derive(Debug, Clone)]
pub struct GridGraph<C> {
    matrix: VertexMatrix<C>,
    store: NodeStore<C>,
    open_list: OpenList,
    stats: SearchStats,
    enable_diagonal: bool,
}

impl<C: Cost> GridGraph<C> {
    /// Build a graph over a W×H grid from a flattened row-major weight
    /// sequence (negative = impassable).
    ///
    /// Fails if the sequence length does not equal `width * height`.
    pub fn new(
        width: i32,
        height: i32,
        weights: Vec<C>,
        enable_diagonal: bool,
    ) -> Result<Self, GridError> {
        let matrix = VertexMatrix::new(width, height, weights)?;
        Ok(Self {
            store: NodeStore::new(width, height),
            open_list: OpenList::new(width, height),
            stats: SearchStats::default(),
            matrix,
            enable_diagonal,
        })
    }

    /// The terrain weight matrix.
    #[inline]
    pub fn matrix(&self) -> &VertexMatrix<C> {
        &self.matrix
    }

    /// Activity counters for the current search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether diagonal moves are generated.
    #[inline]
    pub fn diagonal_enabled(&self) -> bool {
        self.enable_diagonal
    }

    /// Read-only view of the search record for `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the grid bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> &Node<C> {
        self.store.node(c)
    }

    /// Clear all search state (node records, open list and statistics) so
    /// the graph can run a fresh search over the same map.
    pub fn reset(&mut self) {
        self.store.reset();
        self.open_list.clear();
        self.stats.reset();
    }

    /// Step weight between two adjacent cells: straight moves weigh
    /// [`STRAIGHT_EDGE_WEIGHT`](crate::STRAIGHT_EDGE_WEIGHT), diagonal
    /// moves [`DIAGONAL_EDGE_WEIGHT`](crate::DIAGONAL_EDGE_WEIGHT).
    ///
    /// # Panics
    ///
    /// Panics if the cells are not grid-adjacent.
    fn step_weight(from: Coord, to: Coord) -> C {
        let d = (to.x - from.x).abs() + (to.y - from.y).abs();
        match d {
            1 => straight_weight::<C>(),
            2 => diagonal_weight::<C>(),
            _ => panic!("cells {from} and {to} are not adjacent"),
        }
    }

    #[inline]
    fn edge_cost(&self, from: Coord, to: Coord) -> C {
        self.matrix.weight(to) * Self::step_weight(from, to)
    }

    /// Parents must already be part of the search (or the cell itself,
    /// for the start), which keeps the parent forest acyclic.
    fn assert_parent_valid(&self, n: Coord, parent: Coord) {
        if parent == n {
            return;
        }
        let state = self.store.node(parent).state;
        assert!(
            matches!(state, NodeState::Open | NodeState::Closed),
            "parent {parent} of {n} has not been opened"
        );
    }
}

impl<C: Cost> SearchGraph for GridGraph<C> {
    type Node = Coord;
    type Cost = C;

    fn current_cost(&self, n: Coord) -> C {
        self.store.node(n).g
    }

    /// Enumerate the passable 4- or 8-neighborhood of `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is outside the grid bounds.
    fn edges(&self, n: Coord, buf: &mut Vec<Edge<Coord, C>>) {
        assert!(
            self.matrix.in_bounds(n),
            "edges requested for out-of-bounds cell {n}"
        );
        let all;
        let cardinal;
        let neighbors: &[Coord] = if self.enable_diagonal {
            all = n.neighbors_8();
            &all
        } else {
            cardinal = n.neighbors_4();
            &cardinal
        };
        for &to in neighbors {
            if self.matrix.is_passable(to) {
                buf.push(Edge {
                    from: n,
                    to,
                    weight: self.edge_cost(n, to),
                });
            }
        }
    }

    fn equal(&self, a: Coord, b: Coord) -> bool {
        a == b
    }

    fn open_list_nonempty(&self) -> bool {
        !self.open_list.is_empty()
    }

    fn is_unexplored(&self, n: Coord) -> bool {
        self.store.node(n).state == NodeState::Unexplored
    }

    fn is_open(&self, n: Coord) -> bool {
        self.store.node(n).state == NodeState::Open
    }

    /// # Panics
    ///
    /// Panics if `n` is not unexplored or `parent` is not part of the
    /// search.
    fn open(&mut self, n: Coord, g: C, h: C, parent: Coord) {
        self.assert_parent_valid(n, parent);
        {
            let node = self.store.node_mut(n);
            assert!(
                node.state == NodeState::Unexplored,
                "open on already-discovered cell {n}"
            );
            node.g = g;
            node.f = g + h;
            node.parent = parent;
            node.state = NodeState::Open;
        }
        self.open_list.insert(&self.store, n);
        self.stats.opened += 1;
        debug!("node opened: {}", self.store.node(n));
    }

    /// # Panics
    ///
    /// Panics if `n` is not closed or `parent` is not part of the search.
    fn reopen(&mut self, n: Coord, g: C, h: C, parent: Coord) {
        self.assert_parent_valid(n, parent);
        {
            let node = self.store.node_mut(n);
            assert!(
                node.state == NodeState::Closed,
                "reopen on non-closed cell {n}"
            );
            node.g = g;
            node.f = g + h;
            node.parent = parent;
            node.state = NodeState::Open;
        }
        self.open_list.insert(&self.store, n);
        self.stats.reopened += 1;
        debug!("node reopened: {}", self.store.node(n));
    }

    /// # Panics
    ///
    /// Panics if `n` is not open, `parent` is not part of the search, or
    /// the new `f` would exceed the stored one.
    fn increase_priority(&mut self, n: Coord, g: C, h: C, parent: Coord) {
        self.assert_parent_valid(n, parent);
        {
            let node = self.store.node_mut(n);
            assert!(
                node.state == NodeState::Open,
                "increase_priority on non-open cell {n}"
            );
            node.g = g;
            node.parent = parent;
        }
        self.open_list.increase_priority(&mut self.store, n, g + h);
        self.stats.priority_increased += 1;
        debug!("node priority increased: {}", self.store.node(n));
    }

    /// # Panics
    ///
    /// Panics if the open list is empty.
    fn close_front(&mut self) -> Coord {
        let c = self.open_list.remove_front(&self.store);
        self.store.node_mut(c).state = NodeState::Closed;
        self.stats.closed += 1;
        debug!("front node closed: {}", self.store.node(c));
        c
    }

    /// # Panics
    ///
    /// Panics if `goal` was never discovered or its parent chain does not
    /// reach a self-parenting (start) cell within the cell count.
    fn extract_path(&mut self, goal: Coord) -> Vec<Coord> {
        assert!(
            self.store.node(goal).state != NodeState::Unexplored,
            "extract_path from unexplored cell {goal}"
        );
        let mut path = Vec::new();
        let mut p = goal;
        while self.store.node(p).parent != p {
            path.push(p);
            self.store.node_mut(p).state = NodeState::Result;
            p = self.store.node(p).parent;
            if path.len() > self.store.len() {
                panic!("parent chain from {goal} does not reach a start cell");
            }
        }
        path.push(p);
        path.reverse();
        self.store.node_mut(goal).state = NodeState::Goal;
        self.store.node_mut(p).state = NodeState::Start;
        path
    }
}
