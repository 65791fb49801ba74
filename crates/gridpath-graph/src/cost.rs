//! The generic [`Cost`] bound and the grid edge-weight constants.
//!
//! Edge weights, accumulated costs and heuristic estimates all share one
//! numeric type, chosen by the user per graph. Integer and floating-point
//! types both work; the constants below are converted to the concrete type
//! at the call site, so an integer graph sees a diagonal weight of `1`
//! (the same truncation the cost type itself would apply).

use std::fmt;
use std::ops::{Add, Mul};

use num_traits::{Bounded, NumCast, Zero};

/// Weight of an axis-aligned step between adjacent cells.
pub const STRAIGHT_EDGE_WEIGHT: f64 = 1.0;

/// Weight of a diagonal step between adjacent cells.
///
/// Kept as the historical truncated approximation of sqrt(2), not the
/// exact value, so path costs remain comparable across implementations.
pub const DIAGONAL_EDGE_WEIGHT: f64 = 1.4143;

/// Numeric bound for edge weights, g/f-costs and heuristic values.
///
/// Satisfied by the primitive integer and float types via the blanket
/// impl; no per-type code is needed. [`Bounded::max_value`] doubles as the
/// "no cost known yet" sentinel on freshly allocated node records.
pub trait Cost:
    Copy + PartialOrd + Add<Output = Self> + Mul<Output = Self> + Zero + Bounded + NumCast + fmt::Debug
{
    /// Convert an integer quantity (a cell distance) into this cost type.
    ///
    /// # Panics
    ///
    /// Panics if the value is not representable, which cannot happen for
    /// the small grid distances this crate produces.
    #[inline]
    fn from_i32(v: i32) -> Self {
        match NumCast::from(v) {
            Some(c) => c,
            None => panic!("cost type cannot represent {v}"),
        }
    }

    /// Convert an `f64` quantity (an edge-weight constant or a computed
    /// distance) into this cost type, truncating as the type dictates.
    ///
    /// # Panics
    ///
    /// Panics if the value is not representable.
    #[inline]
    fn from_f64(v: f64) -> Self {
        match NumCast::from(v) {
            Some(c) => c,
            None => panic!("cost type cannot represent {v}"),
        }
    }
}

impl<T> Cost for T where
    T: Copy
        + PartialOrd
        + Add<Output = T>
        + Mul<Output = T>
        + Zero
        + Bounded
        + NumCast
        + fmt::Debug
{
}

/// [`STRAIGHT_EDGE_WEIGHT`] in the concrete cost type.
#[inline]
pub fn straight_weight<C: Cost>() -> C {
    C::from_f64(STRAIGHT_EDGE_WEIGHT)
}

/// [`DIAGONAL_EDGE_WEIGHT`] in the concrete cost type.
#[inline]
pub fn diagonal_weight<C: Cost>() -> C {
    C::from_f64(DIAGONAL_EDGE_WEIGHT)
}
