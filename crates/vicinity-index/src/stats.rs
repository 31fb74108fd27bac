//! Per-query work counters for the ring search.

/// How much work a single nearest-marker search did.
///
/// Populated by [`RingSearch`](crate::RingSearch) as rings are expanded;
/// callers read it after the search to profile queries or to assert the
/// termination bound (`rings <= max_distance + 1`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// First ring radius examined (distance from the query to the grid).
    pub start_radius: u64,
    /// Distance from the query to the farthest grid corner.
    pub max_distance: u64,
    /// Number of rings examined, including the radius-0 cell check.
    pub rings: u64,
    /// Markers found on examined rings, available or not.
    pub candidates: usize,
    /// Candidates dropped because every offer was sold out.
    pub sold_out: usize,
}
