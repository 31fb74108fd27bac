//! Markers grouped by diagonal, for range lookups along diamond edges.

use indexmap::IndexMap;
use tracing::debug;
use vicinity_core::{Grid, IntegrityError, MarkerId, Point};

/// One of the two diagonal families a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Anti-diagonals: cells sharing `x + y`.
    Descending,
    /// Diagonals: cells sharing `x - y`.
    Ascending,
}

impl Family {
    /// The key of grid-local `(x, y)` within this family.
    pub fn key(self, x: i64, y: i64) -> i64 {
        match self {
            Self::Descending => x + y,
            Self::Ascending => x - y,
        }
    }
}

/// An occupied cell as stored in a diagonal group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagonalEntry {
    /// Grid-local column.
    pub x: u32,
    /// Grid-local row.
    pub y: u32,
    /// The marker in this cell.
    pub marker: MarkerId,
}

type Groups = IndexMap<i64, Vec<DiagonalEntry>>;

/// Read-only index of a grid's markers by diagonal.
///
/// Built once from a [`Grid`]; each family maps a diagonal key to the
/// markers on that diagonal sorted by ascending `x`. Within one key, `x`
/// determines `y`, so the order is strict and a half-open `x` range maps
/// to a contiguous slice.
///
/// The index also fixes the origin that translates logical query points
/// into grid-local coordinates for its whole lifetime.
#[derive(Clone, Debug)]
pub struct DiagonalIndex {
    width: u32,
    height: u32,
    origin: Point,
    marker_count: usize,
    descending: Groups,
    ascending: Groups,
}

impl DiagonalIndex {
    /// Index every occupied cell of `grid`.
    ///
    /// `origin` is the logical coordinate of grid-local `(0, 0)`.
    pub fn build(grid: &Grid, origin: Point) -> Self {
        let mut descending = Groups::new();
        let mut ascending = Groups::new();
        for (x, y, marker) in grid.markers() {
            let entry = DiagonalEntry { x, y, marker };
            let (lx, ly) = (i64::from(x), i64::from(y));
            descending
                .entry(Family::Descending.key(lx, ly))
                .or_default()
                .push(entry);
            ascending
                .entry(Family::Ascending.key(lx, ly))
                .or_default()
                .push(entry);
        }
        // Row-major insertion leaves anti-diagonals in descending x.
        for group in descending.values_mut().chain(ascending.values_mut()) {
            group.sort_unstable_by_key(|e| e.x);
        }
        descending.sort_keys();
        ascending.sort_keys();

        debug!(
            width = grid.width(),
            height = grid.height(),
            markers = grid.marker_count(),
            descending_keys = descending.len(),
            ascending_keys = ascending.len(),
            "built diagonal index"
        );

        Self {
            width: grid.width(),
            height: grid.height(),
            origin,
            marker_count: grid.marker_count(),
            descending,
            ascending,
        }
    }

    /// Markers on diagonal `key` of `family` whose `x` lies in `[x_low, x_high)`.
    ///
    /// Two binary searches over the key's sorted group: O(log n + m).
    /// Unknown keys and empty ranges yield an empty slice.
    pub fn segment(&self, family: Family, key: i64, x_low: i64, x_high: i64) -> &[DiagonalEntry] {
        if x_high <= x_low {
            return &[];
        }
        let Some(group) = self.groups(family).get(&key) else {
            return &[];
        };
        let lo = group.partition_point(|e| i64::from(e.x) < x_low);
        let hi = group.partition_point(|e| i64::from(e.x) < x_high);
        &group[lo..hi]
    }

    /// Every group of `family` in ascending key order.
    pub fn iter_family(&self, family: Family) -> impl Iterator<Item = (i64, &[DiagonalEntry])> + '_ {
        self.groups(family).iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Number of distinct non-empty diagonals in `family`.
    pub fn key_count(&self, family: Family) -> usize {
        self.groups(family).len()
    }

    /// Logical coordinate of grid-local `(0, 0)`.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Translate a logical point into grid-local coordinates.
    pub fn to_local(&self, point: Point) -> (i64, i64) {
        point.local_to(self.origin)
    }

    /// Width of the indexed grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the indexed grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of indexed markers.
    pub fn len(&self) -> usize {
        self.marker_count
    }

    /// Whether the indexed grid has no markers.
    pub fn is_empty(&self) -> bool {
        self.marker_count == 0
    }

    /// Reject a grid whose dimensions differ from the one indexed.
    pub fn check_grid(&self, grid: &Grid) -> Result<(), IntegrityError> {
        if (grid.width(), grid.height()) != (self.width, self.height) {
            return Err(IntegrityError::IndexMismatch {
                index: (self.width, self.height),
                grid: (grid.width(), grid.height()),
            });
        }
        Ok(())
    }

    fn groups(&self, family: Family) -> &Groups {
        match family {
            Family::Descending => &self.descending,
            Family::Ascending => &self.ascending,
        }
    }
}
