//! Grid distance functions, usable as A* heuristics.
//!
//! All three are pure and generic over the cost type. Pairing a heuristic
//! with the right connectivity mode is the driver's job: `manhattan` is
//! admissible only on 4-connected grids, `diagonal` is admissible and
//! consistent on 8-connected grids with the standard step weights, and
//! `euclidean` is admissible everywhere but generally not tight.

use gridpath_core::Coord;

use crate::cost::{Cost, diagonal_weight, straight_weight};

/// Manhattan (L1) distance: |Δx| + |Δy|.
#[inline]
pub fn manhattan<C: Cost>(a: Coord, b: Coord) -> C {
    C::from_i32((b.x - a.x).abs() + (b.y - a.y).abs())
}

/// Octile distance: diagonal steps across the short axis, straight steps
/// for the remainder, using the same weights as the grid's edges.
#[inline]
pub fn diagonal<C: Cost>(a: Coord, b: Coord) -> C {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let dmin = dx.min(dy);
    let dmax = dx.max(dy);
    C::from_i32(dmin) * diagonal_weight::<C>() + C::from_i32(dmax - dmin) * straight_weight::<C>()
}

/// Euclidean (L2) distance: √(Δx² + Δy²), computed in `f64` and converted
/// once.
#[inline]
pub fn euclidean<C: Cost>(a: Coord, b: Coord) -> C {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    C::from_f64((dx * dx + dy * dy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn manhattan_sums_axis_deltas() {
        let a = Coord::new(0, 0);
        let b = Coord::new(2, 2);
        assert_eq!(manhattan::<f64>(a, b), 4.0);
        assert_eq!(manhattan::<i32>(a, b), 4);
        // Symmetric and sign-insensitive.
        assert_eq!(manhattan::<f64>(b, a), 4.0);
        assert_eq!(manhattan::<f64>(Coord::new(-1, -1), a), 2.0);
    }

    #[test]
    fn diagonal_uses_grid_step_weights() {
        let a = Coord::new(0, 0);
        assert!((diagonal::<f64>(a, Coord::new(2, 2)) - 2.0 * 1.4143).abs() < EPS);
        // 3 across, 1 diagonal.
        assert!((diagonal::<f64>(a, Coord::new(4, 1)) - (1.4143 + 3.0)).abs() < EPS);
        assert_eq!(diagonal::<f64>(a, a), 0.0);
    }

    #[test]
    fn diagonal_truncates_for_integer_costs() {
        // The diagonal weight converts to 1 for i32, so the metric
        // degrades to Chebyshev distance.
        let a = Coord::new(0, 0);
        assert_eq!(diagonal::<i32>(a, Coord::new(2, 2)), 2);
        assert_eq!(diagonal::<i32>(a, Coord::new(4, 1)), 4);
    }

    #[test]
    fn euclidean_matches_pythagoras() {
        let a = Coord::new(0, 0);
        assert!((euclidean::<f64>(a, Coord::new(3, 4)) - 5.0).abs() < EPS);
        assert!((euclidean::<f64>(a, Coord::new(1, 1)) - std::f64::consts::SQRT_2).abs() < EPS);
        assert_eq!(euclidean::<i32>(a, Coord::new(3, 4)), 5);
    }

    #[test]
    fn heuristics_never_exceed_true_grid_cost() {
        // On a uniform-weight 8-connected grid the true cost between two
        // cells is the octile distance; the other metrics must stay at or
        // below it to remain admissible.
        let pairs = [
            (Coord::new(0, 0), Coord::new(5, 2)),
            (Coord::new(3, 3), Coord::new(0, 7)),
            (Coord::new(-2, 1), Coord::new(4, -4)),
        ];
        for (a, b) in pairs {
            let octile = diagonal::<f64>(a, b);
            assert!(euclidean::<f64>(a, b) <= octile + 1e-9);
        }
    }
}
