//! Distance bounds between a query point and the grid rectangle.
//!
//! All coordinates are grid-local and widened to `i64`; the grid occupies
//! `[0, width) x [0, height)`.

/// Distance from `v` to the nearest value in `[0, len)` along one axis.
pub(crate) fn axis_gap(v: i64, len: u32) -> u64 {
    let last = i64::from(len) - 1;
    if v < 0 {
        v.unsigned_abs()
    } else if v > last {
        (v - last) as u64
    } else {
        0
    }
}

/// Distance from `v` to the farther end of `[0, len)` along one axis.
pub(crate) fn axis_reach(v: i64, len: u32) -> u64 {
    let last = i64::from(len) - 1;
    v.abs_diff(0).max(v.abs_diff(last))
}

/// Manhattan distance from `q` to the closest cell of the grid.
///
/// Zero when `q` is inside the grid. No marker can be closer than this,
/// so it is the first ring radius worth examining.
pub(crate) fn start_radius(q: (i64, i64), width: u32, height: u32) -> u64 {
    axis_gap(q.0, width) + axis_gap(q.1, height)
}

/// Manhattan distance from `q` to the farthest grid corner.
///
/// Every cell lies within this radius, so ring expansion never needs to
/// go past it.
pub(crate) fn max_distance(q: (i64, i64), width: u32, height: u32) -> u64 {
    axis_reach(q.0, width) + axis_reach(q.1, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vicinity_core::manhattan_distance;

    #[test]
    fn inside_point_starts_at_zero() {
        assert_eq!(start_radius((1, 1), 3, 3), 0);
        assert_eq!(start_radius((0, 2), 3, 3), 0);
    }

    #[test]
    fn outside_point_starts_at_box_distance() {
        // (5,5) against a 3x3 grid: nearest cell is (2,2).
        assert_eq!(start_radius((5, 5), 3, 3), 6);
        assert_eq!(start_radius((-4, 1), 3, 3), 4);
        assert_eq!(start_radius((-1, -1), 3, 3), 2);
    }

    #[test]
    fn max_distance_reaches_far_corner() {
        assert_eq!(max_distance((1, 1), 3, 3), 2);
        assert_eq!(max_distance((0, 0), 3, 3), 4);
        // (5,5) against 3x3: farthest corner is (0,0).
        assert_eq!(max_distance((5, 5), 3, 3), 10);
    }

    #[test]
    fn single_cell_grid() {
        assert_eq!(start_radius((0, 0), 1, 1), 0);
        assert_eq!(max_distance((0, 0), 1, 1), 0);
        assert_eq!(start_radius((3, -2), 1, 1), 5);
        assert_eq!(max_distance((3, -2), 1, 1), 5);
    }

    proptest! {
        #[test]
        fn bounds_bracket_every_cell(
            w in 1u32..8, h in 1u32..8,
            qx in -10i64..18, qy in -10i64..18,
        ) {
            let q = (qx, qy);
            let mut lo = u64::MAX;
            let mut hi = 0;
            for x in 0..i64::from(w) {
                for y in 0..i64::from(h) {
                    let d = manhattan_distance(q, (x, y));
                    lo = lo.min(d);
                    hi = hi.max(d);
                }
            }
            prop_assert_eq!(start_radius(q, w, h), lo);
            prop_assert_eq!(max_distance(q, w, h), hi);
        }
    }
}
