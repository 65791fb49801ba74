//! The abstract graph contract consumed by best-first search drivers.
//!
//! A driver (A*, Dijkstra, weighted variants) operates on any graph
//! through [`SearchGraph`] alone: it enumerates edges, computes tentative
//! costs, and mutates the frontier through the open/reopen/re-prioritize
//! primitives. All node-state bookkeeping stays behind the trait, so
//! non-grid graphs can satisfy the same contract.

use crate::cost::Cost;

/// A directed, weighted edge between adjacent graph nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N, C> {
    pub from: N,
    pub to: N,
    pub weight: C,
}

/// Weighted graph with built-in best-first search bookkeeping.
///
/// The mutators carry preconditions on the per-node state machine
/// (`unexplored → open → closed → open → …`); violating one is a caller
/// bug and panics rather than corrupting the frontier invariants.
pub trait SearchGraph {
    type Node: Copy + PartialEq;
    type Cost: Cost;

    /// Accumulated cost from the search start to `n` along the best known
    /// path.
    fn current_cost(&self, n: Self::Node) -> Self::Cost;

    /// Append the outgoing edges of `n` into `buf`. The caller clears
    /// `buf` before calling.
    fn edges(&self, n: Self::Node, buf: &mut Vec<Edge<Self::Node, Self::Cost>>);

    /// Identity equality on nodes.
    fn equal(&self, a: Self::Node, b: Self::Node) -> bool;

    /// Whether the frontier still holds at least one cell.
    fn open_list_nonempty(&self) -> bool;

    /// Whether `n` has never been discovered.
    fn is_unexplored(&self, n: Self::Node) -> bool;

    /// Whether `n` currently sits in the open list.
    fn is_open(&self, n: Self::Node) -> bool;

    /// First discovery of `n`: record `g`, `f = g + h` and `parent`, and
    /// push `n` onto the frontier. Precondition: `n` is unexplored.
    fn open(&mut self, n: Self::Node, g: Self::Cost, h: Self::Cost, parent: Self::Node);

    /// Re-admit a closed `n` after a cheaper path was found.
    /// Precondition: `n` is closed.
    fn reopen(&mut self, n: Self::Node, g: Self::Cost, h: Self::Cost, parent: Self::Node);

    /// Improve the cost of an open `n` in place. Precondition: `n` is
    /// open and the new `f` does not exceed the stored one.
    fn increase_priority(&mut self, n: Self::Node, g: Self::Cost, h: Self::Cost, parent: Self::Node);

    /// Pop the minimum-`f` cell off the frontier and mark it closed.
    /// Precondition: the frontier is non-empty.
    fn close_front(&mut self) -> Self::Node;

    /// Walk parent links back from `goal` and return the path from the
    /// start cell (the fixed point of the parent relation) to `goal`,
    /// endpoints included.
    fn extract_path(&mut self, goal: Self::Node) -> Vec<Self::Node>;
}
