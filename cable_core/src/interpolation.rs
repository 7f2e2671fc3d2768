//! # Piecewise-Linear Interpolation
//!
//! Shared 1-D interpolation over sparse (breakpoint, value) tables. Every
//! factor resolver and the two-stage resistivity lookup go through this
//! module, so all of them have identical edge behavior:
//!
//! - queries between two breakpoints interpolate linearly,
//! - queries at a breakpoint return the tabulated value exactly,
//! - queries outside the tabulated range evaluate the edge segment's line at
//!   the query point (the boundary segment, never a segment further in).

/// Linear interpolation between (x1, y1) and (x2, y2), evaluated at `x`.
///
/// Returns `y1` when `x1 == x2` to guard the division.
pub fn lerp(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x2 == x1 {
        return y1;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Interpolate a sorted (breakpoint, value) table at `x`.
///
/// `points` must be sorted by breakpoint, strictly increasing, with at least
/// one entry. A single-entry table returns that entry's value.
pub fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    debug_assert!(!points.is_empty());
    debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));

    if points.len() == 1 {
        return points[0].1;
    }

    let last = points.len() - 1;
    let (lo, hi) = if x <= points[0].0 {
        (0, 1)
    } else if x >= points[last].0 {
        (last - 1, last)
    } else {
        let mut pair = (0, 1);
        for i in 0..last {
            if points[i].0 <= x && x <= points[i + 1].0 {
                pair = (i, i + 1);
                break;
            }
        }
        pair
    };

    lerp(x, points[lo].0, points[lo].1, points[hi].0, points[hi].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(f64, f64)] = &[(10.0, 1.0), (20.0, 2.0), (40.0, 4.0)];

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(15.0, 10.0, 1.0, 20.0, 2.0), 1.5);
    }

    #[test]
    fn test_lerp_degenerate_segment() {
        // Equal breakpoints must not divide by zero
        assert_eq!(lerp(10.0, 10.0, 1.0, 10.0, 9.0), 1.0);
    }

    #[test]
    fn test_exact_knots() {
        for &(x, y) in TABLE {
            assert_eq!(interpolate(TABLE, x), y);
        }
    }

    #[test]
    fn test_between_knots() {
        assert!((interpolate(TABLE, 30.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_below_range_follows_first_segment() {
        // Segment (10,1)-(20,2) evaluated at x=5 gives 0.5
        assert!((interpolate(TABLE, 5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_above_range_follows_last_segment() {
        // Segment (20,2)-(40,4) evaluated at x=50 gives 5.0
        assert!((interpolate(TABLE, 50.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_entry_table() {
        assert_eq!(interpolate(&[(1.0, 7.0)], 99.0), 7.0);
    }
}
