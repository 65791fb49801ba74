//! The [`VertexMatrix`] — immutable per-cell terrain weights.
//!
//! A negative weight marks a cell impassable; all other values are
//! non-negative traversal multipliers. The matrix never changes after
//! construction, so it can be cloned freely and shared between searches.

use gridpath_core::Coord;

use crate::cost::Cost;
use crate::error::GridError;

/// Fixed W×H array of terrain weights, row-major.
#[derive(Debug, Clone)]
pub struct VertexMatrix<C> {
    width: i32,
    height: i32,
    weights: Vec<C>,
}

impl<C: Cost> VertexMatrix<C> {
    /// Build a matrix from a flattened row-major weight sequence.
    ///
    /// Fails if the sequence length does not equal `width * height`.
    pub fn new(width: i32, height: i32, weights: Vec<C>) -> Result<Self, GridError> {
        let expected = (width.max(0) as usize) * (height.max(0) as usize);
        if weights.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `c` lies within `[0, W) x [0, H)`.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some((c.y as usize) * (self.width as usize) + c.x as usize)
        } else {
            None
        }
    }

    /// The stored terrain weight at `c`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<C> {
        self.index(c).map(|i| self.weights[i])
    }

    /// The stored terrain weight at `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the grid bounds.
    #[inline]
    pub fn weight(&self, c: Coord) -> C {
        match self.get(c) {
            Some(w) => w,
            None => panic!("coordinate {c} outside {}x{} grid", self.width, self.height),
        }
    }

    /// Whether `c` is inside the grid and has a non-negative weight.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        match self.get(c) {
            Some(w) => w >= C::zero(),
            None => false,
        }
    }
}
