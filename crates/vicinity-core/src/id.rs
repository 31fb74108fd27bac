//! Strongly-typed identifiers and the [`Price`] unit.

use std::fmt;

/// Identifies a marker placed on the grid.
///
/// Marker ids are opaque to the search: they are only compared for
/// equality (to join grid cells with catalog entries) and for ordering
/// (as the final tie-break between equally near, equally priced markers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MarkerId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A price in the smallest currency unit (e.g. cents).
///
/// Formatting into a major unit is left to the presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(pub u64);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Price {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
