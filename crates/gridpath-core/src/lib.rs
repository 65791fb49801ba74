//! **gridpath-core** — Grid search graph backend (core geometry types).
//!
//! This crate provides the [`Coord`] type used as the cell key throughout
//! the *gridpath* ecosystem. It carries no search semantics of its own.

pub mod coord;

pub use coord::Coord;
