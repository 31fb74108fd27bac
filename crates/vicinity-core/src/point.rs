//! Logical points and the Manhattan metric.

use std::fmt;

/// A point in the caller's logical coordinate system.
///
/// Logical points are translated into grid-local coordinates by
/// subtracting the world origin. They may lie anywhere, including far
/// outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal coordinate (column axis).
    pub x: i32,
    /// Vertical coordinate (row axis).
    pub y: i32,
}

impl Point {
    /// Construct a point from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate into the local frame whose `(0, 0)` sits at `origin`.
    ///
    /// Widens to `i64`, so the subtraction cannot overflow.
    pub fn local_to(self, origin: Point) -> (i64, i64) {
        (
            i64::from(self.x) - i64::from(origin.x),
            i64::from(self.y) - i64::from(origin.y),
        )
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan (L1) distance between two local coordinates.
pub fn manhattan_distance(a: (i64, i64), b: (i64, i64)) -> u64 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
