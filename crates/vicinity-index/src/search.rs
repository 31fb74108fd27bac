//! Expanding-ring k-nearest search over a [`DiagonalIndex`].
//!
//! The cells at Manhattan distance `d >= 1` from `(qx, qy)` are the edges
//! of a diamond. Each edge lies on one diagonal:
//!
//! | edge | family | key | `x` range |
//! |------|--------|-----|-----------|
//! | north-east | descending | `qx + qy + d` | `[qx, qx + d)` |
//! | south-east | ascending | `qx - qy + d` | `[qx + 1, qx + d + 1)` |
//! | south-west | descending | `qx + qy - d` | `[qx - d + 1, qx + 1)` |
//! | north-west | ascending | `qx - qy - d` | `[qx - d, qx)` |
//!
//! The half-open ranges give each of the four corners to exactly one edge.
//! At `d = 0` every range is empty, so the query cell is read from the
//! grid directly.

use crate::bounds;
use crate::diagonal::{DiagonalEntry, DiagonalIndex, Family};
use crate::stats::SearchStats;
use smallvec::SmallVec;
use std::fmt;
use tracing::{debug, trace};
use vicinity_core::{EventCatalog, Grid, IntegrityError, MarkerId, Point, Price};

/// One search result.
///
/// Field order gives the derived ordering: by distance, then price, then
/// marker id. Results are always emitted in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nearby {
    /// Manhattan distance from the query point.
    pub distance: u64,
    /// Cheapest available price of the marker.
    pub price: Price,
    /// The marker found.
    pub marker: MarkerId,
}

impl fmt::Display for Nearby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "marker {} at distance {} from {}",
            self.marker, self.distance, self.price
        )
    }
}

/// The available markers found on one ring, sorted by `(price, marker)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ring {
    /// Distance of every hit on this ring.
    pub radius: u64,
    /// Available markers on the ring.
    pub hits: SmallVec<[Nearby; 8]>,
}

/// A resumable expanding-ring search.
///
/// Each call to [`next_ring`](RingSearch::next_ring) examines one ring,
/// starting at the distance from the query to the grid and ending at the
/// distance to the farthest grid corner, or as soon as every indexed
/// marker has been seen. Callers that only need a prefix can stop pulling
/// rings at any time; [`nearest`] drives the search to `k` results.
///
/// The search borrows its inputs immutably, so any number of searches may
/// run concurrently against the same grid, index, and catalog.
#[derive(Debug)]
pub struct RingSearch<'a> {
    grid: &'a Grid,
    index: &'a DiagonalIndex,
    catalog: &'a EventCatalog,
    query: (i64, i64),
    radius: u64,
    visited: usize,
    finished: bool,
    stats: SearchStats,
}

impl<'a> RingSearch<'a> {
    /// Prepare a search around logical point `query`.
    ///
    /// Returns `Err(IntegrityError::IndexMismatch)` if `index` was built
    /// for a grid of different dimensions.
    pub fn new(
        query: Point,
        grid: &'a Grid,
        index: &'a DiagonalIndex,
        catalog: &'a EventCatalog,
    ) -> Result<Self, IntegrityError> {
        index.check_grid(grid)?;
        let q = index.to_local(query);
        let start_radius = bounds::start_radius(q, grid.width(), grid.height());
        let max_distance = bounds::max_distance(q, grid.width(), grid.height());
        Ok(Self {
            grid,
            index,
            catalog,
            query: q,
            radius: start_radius,
            visited: 0,
            finished: false,
            stats: SearchStats {
                start_radius,
                max_distance,
                ..SearchStats::default()
            },
        })
    }

    /// Radius of the next ring to examine.
    pub fn radius(&self) -> u64 {
        self.radius
    }

    /// Largest radius that can hold a marker.
    pub fn max_distance(&self) -> u64 {
        self.stats.max_distance
    }

    /// Whether no further rings will be produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Work done so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the search, keeping its counters.
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Examine the next ring.
    ///
    /// Returns `None` once the radius passes the farthest corner or every
    /// indexed marker has been visited. A marker missing from the catalog
    /// yields `Some(Err(IntegrityError::MissingOffers))` and ends the search.
    pub fn next_ring(&mut self) -> Option<Result<Ring, IntegrityError>> {
        if self.finished
            || self.radius > self.stats.max_distance
            || self.visited >= self.index.len()
        {
            self.finished = true;
            return None;
        }

        let radius = self.radius;
        let mut candidates = self.candidates(radius);
        candidates.sort_unstable_by_key(|e| e.marker);
        candidates.dedup_by_key(|e| e.marker);

        self.radius += 1;
        self.visited += candidates.len();
        self.stats.rings += 1;
        self.stats.candidates += candidates.len();

        let mut hits: SmallVec<[Nearby; 8]> = SmallVec::with_capacity(candidates.len());
        for entry in &candidates {
            match self.catalog.lowest_available_price(entry.marker) {
                Ok(Some(price)) => hits.push(Nearby {
                    distance: radius,
                    price,
                    marker: entry.marker,
                }),
                Ok(None) => self.stats.sold_out += 1,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
        hits.sort_unstable();

        trace!(
            radius,
            candidates = candidates.len(),
            hits = hits.len(),
            "ring expanded"
        );
        Some(Ok(Ring { radius, hits }))
    }

    /// Occupied cells at exactly `radius` from the query.
    fn candidates(&self, radius: u64) -> SmallVec<[DiagonalEntry; 16]> {
        let (qx, qy) = self.query;
        if radius == 0 {
            return self
                .grid
                .get(qx, qy)
                .map(|marker| DiagonalEntry {
                    x: qx as u32,
                    y: qy as u32,
                    marker,
                })
                .into_iter()
                .collect();
        }

        let d = radius as i64;
        let sum = qx + qy;
        let diff = qx - qy;
        let edges = [
            (Family::Descending, sum + d, qx, qx + d),
            (Family::Ascending, diff + d, qx + 1, qx + d + 1),
            (Family::Descending, sum - d, qx - d + 1, qx + 1),
            (Family::Ascending, diff - d, qx - d, qx),
        ];
        let mut out = SmallVec::new();
        for (family, key, x_low, x_high) in edges {
            out.extend_from_slice(self.index.segment(family, key, x_low, x_high));
        }
        out
    }
}

impl Iterator for RingSearch<'_> {
    type Item = Result<Ring, IntegrityError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ring()
    }
}

/// The `limit` nearest available markers to `query`, nearest first.
///
/// Results are ordered by `(distance, price, marker)`; sold-out markers
/// never appear. `limit = None` returns every available marker and
/// `Some(0)` returns an empty list without examining any ring. Fewer
/// results than requested is a normal outcome, not an error.
///
/// # Examples
///
/// ```
/// use vicinity_core::{EventCatalog, Grid, MarkerId, OfferTable, Point, Price};
/// use vicinity_index::{nearest, DiagonalIndex};
///
/// let grid = Grid::from_rows(vec![
///     vec![None, None],
///     vec![None, Some(MarkerId(7))],
/// ])
/// .unwrap();
/// let offers: OfferTable = [(Price(250), 3)].into_iter().collect();
/// let catalog = EventCatalog::new([(MarkerId(7), offers)]).unwrap();
/// let index = DiagonalIndex::build(&grid, Point::default());
///
/// let found = nearest(Point::new(0, 0), &grid, &index, &catalog, Some(3)).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!((found[0].distance, found[0].price), (2, Price(250)));
/// ```
pub fn nearest(
    query: Point,
    grid: &Grid,
    index: &DiagonalIndex,
    catalog: &EventCatalog,
    limit: Option<usize>,
) -> Result<Vec<Nearby>, IntegrityError> {
    nearest_with_stats(query, grid, index, catalog, limit).map(|(found, _)| found)
}

/// Like [`nearest`], also returning the search's work counters.
pub fn nearest_with_stats(
    query: Point,
    grid: &Grid,
    index: &DiagonalIndex,
    catalog: &EventCatalog,
    limit: Option<usize>,
) -> Result<(Vec<Nearby>, SearchStats), IntegrityError> {
    let mut search = RingSearch::new(query, grid, index, catalog)?;
    let mut found = Vec::with_capacity(limit.unwrap_or(0).min(index.len()));

    if limit != Some(0) {
        'rings: for ring in &mut search {
            for hit in ring?.hits {
                found.push(hit);
                if limit.is_some_and(|k| found.len() >= k) {
                    break 'rings;
                }
            }
        }
    }

    let stats = search.into_stats();
    debug!(
        %query,
        found = found.len(),
        rings = stats.rings,
        candidates = stats.candidates,
        sold_out = stats.sold_out,
        "nearest search finished"
    );
    Ok((found, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vicinity_core::OfferTable;

    fn m(id: u64) -> Option<MarkerId> {
        Some(MarkerId(id))
    }

    fn table(pairs: &[(u64, u64)]) -> OfferTable {
        pairs.iter().map(|&(p, q)| (Price(p), q)).collect()
    }

    fn hit(distance: u64, price: u64, marker: u64) -> Nearby {
        Nearby {
            distance,
            price: Price(price),
            marker: MarkerId(marker),
        }
    }

    /// 3x3 grid: 303 at (0,0) sold out, 101 at (1,1), 202 at (2,2).
    fn scenario() -> (Grid, EventCatalog, DiagonalIndex) {
        let grid = Grid::from_rows(vec![
            vec![m(303), None, None],
            vec![None, m(101), None],
            vec![None, None, m(202)],
        ])
        .unwrap();
        let catalog = EventCatalog::new([
            (MarkerId(101), table(&[(500, 10)])),
            (MarkerId(202), table(&[(300, 0), (600, 5)])),
            (MarkerId(303), table(&[(200, 0)])),
        ])
        .unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        (grid, catalog, index)
    }

    #[test]
    fn scenario_center_query() {
        let (grid, catalog, index) = scenario();
        let q = Point::new(1, 1);
        assert_eq!(
            nearest(q, &grid, &index, &catalog, Some(2)).unwrap(),
            vec![hit(0, 500, 101), hit(2, 600, 202)]
        );
        assert_eq!(
            nearest(q, &grid, &index, &catalog, Some(1)).unwrap(),
            vec![hit(0, 500, 101)]
        );
    }

    #[test]
    fn scenario_unbounded_limit_excludes_sold_out() {
        let (grid, catalog, index) = scenario();
        let (found, stats) =
            nearest_with_stats(Point::new(1, 1), &grid, &index, &catalog, None).unwrap();
        assert_eq!(found, vec![hit(0, 500, 101), hit(2, 600, 202)]);
        assert_eq!(stats.candidates, 3);
        assert_eq!(stats.sold_out, 1);
    }

    #[test]
    fn outside_query_starts_at_box_distance() {
        let (grid, catalog, index) = scenario();
        let (found, stats) =
            nearest_with_stats(Point::new(5, 5), &grid, &index, &catalog, None).unwrap();
        assert_eq!(stats.start_radius, 6);
        assert_eq!(stats.max_distance, 10);
        assert_eq!(found, vec![hit(6, 600, 202), hit(8, 500, 101)]);
    }

    #[test]
    fn zero_limit_examines_nothing() {
        let (grid, catalog, index) = scenario();
        let (found, stats) =
            nearest_with_stats(Point::new(1, 1), &grid, &index, &catalog, Some(0)).unwrap();
        assert!(found.is_empty());
        assert_eq!(stats.rings, 0);
    }

    #[test]
    fn empty_grid_returns_nothing() {
        let grid = Grid::from_rows(vec![vec![None; 5]; 5]).unwrap();
        let catalog = EventCatalog::default();
        let index = DiagonalIndex::build(&grid, Point::default());
        let (found, stats) =
            nearest_with_stats(Point::new(-100, 40), &grid, &index, &catalog, None).unwrap();
        assert!(found.is_empty());
        assert_eq!(stats.rings, 0);
    }

    #[test]
    fn stops_once_every_marker_is_seen() {
        let mut rows = vec![vec![None; 100]; 100];
        rows[0][1] = m(1);
        let grid = Grid::from_rows(rows).unwrap();
        let catalog = EventCatalog::new([(MarkerId(1), table(&[(10, 1)]))]).unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        let (found, stats) =
            nearest_with_stats(Point::new(0, 0), &grid, &index, &catalog, None).unwrap();
        assert_eq!(found, vec![hit(1, 10, 1)]);
        assert_eq!(stats.rings, 2);
    }

    #[test]
    fn equal_distance_orders_by_price_then_id() {
        let grid = Grid::from_rows(vec![
            vec![None, m(9), None],
            vec![m(8), None, m(4)],
            vec![None, m(6), None],
        ])
        .unwrap();
        let catalog = EventCatalog::new([
            (MarkerId(9), table(&[(100, 1)])),
            (MarkerId(8), table(&[(50, 1)])),
            (MarkerId(4), table(&[(100, 2)])),
            (MarkerId(6), table(&[(75, 0), (100, 1)])),
        ])
        .unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        let found = nearest(Point::new(1, 1), &grid, &index, &catalog, None).unwrap();
        assert_eq!(
            found,
            vec![hit(1, 50, 8), hit(1, 100, 4), hit(1, 100, 6), hit(1, 100, 9)]
        );
    }

    #[test]
    fn missing_offers_is_an_error_not_sold_out() {
        let grid = Grid::from_rows(vec![vec![m(1), m(2)]]).unwrap();
        let catalog = EventCatalog::new([(MarkerId(1), table(&[(10, 1)]))]).unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        let err = nearest(Point::new(0, 0), &grid, &index, &catalog, None).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::MissingOffers {
                marker: MarkerId(2)
            }
        );
    }

    #[test]
    fn missing_offers_beyond_limit_is_not_reached() {
        let grid = Grid::from_rows(vec![vec![m(1), None, m(2)]]).unwrap();
        let catalog = EventCatalog::new([(MarkerId(1), table(&[(10, 1)]))]).unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        let found = nearest(Point::new(0, 0), &grid, &index, &catalog, Some(1)).unwrap();
        assert_eq!(found, vec![hit(0, 10, 1)]);
    }

    #[test]
    fn index_for_other_grid_is_rejected() {
        let (grid, catalog, _) = scenario();
        let other = Grid::from_rows(vec![vec![None; 4]; 4]).unwrap();
        let index = DiagonalIndex::build(&other, Point::default());
        assert!(matches!(
            RingSearch::new(Point::new(0, 0), &grid, &index, &catalog),
            Err(IntegrityError::IndexMismatch { .. })
        ));
    }

    #[test]
    fn ring_cursor_can_be_abandoned() {
        let (grid, catalog, index) = scenario();
        let mut search = RingSearch::new(Point::new(0, 0), &grid, &index, &catalog).unwrap();
        let first = search.next_ring().unwrap().unwrap();
        assert_eq!(first.radius, 0);
        assert!(first.hits.is_empty());
        assert_eq!(search.radius(), 1);
        assert!(!search.is_finished());
        assert_eq!(search.stats().sold_out, 1);
    }

    #[test]
    fn cursor_finishes_after_max_distance() {
        let grid = Grid::from_rows(vec![vec![None, None], vec![None, m(1)]]).unwrap();
        let catalog = EventCatalog::new([(MarkerId(1), table(&[(10, 0)]))]).unwrap();
        let index = DiagonalIndex::build(&grid, Point::default());
        let search = RingSearch::new(Point::new(0, 0), &grid, &index, &catalog).unwrap();
        assert_eq!(search.max_distance(), 2);
        let rings: Vec<u64> = search.map(|r| r.unwrap().radius).collect();
        assert_eq!(rings, vec![0, 1, 2]);
    }

    proptest! {
        #[test]
        fn rings_partition_a_full_grid(
            w in 1u32..7, h in 1u32..7,
            qx in -4i32..10, qy in -4i32..10,
        ) {
            let rows: Vec<Vec<Option<MarkerId>>> = (0..h)
                .map(|y| (0..w).map(|x| Some(MarkerId(u64::from(y * w + x)))).collect())
                .collect();
            let grid = Grid::from_rows(rows).unwrap();
            let catalog = EventCatalog::new(
                grid.markers().map(|(_, _, id)| (id, table(&[(1, 1)]))),
            )
            .unwrap();
            let index = DiagonalIndex::build(&grid, Point::default());
            let q = (i64::from(qx), i64::from(qy));

            let search = RingSearch::new(Point::new(qx, qy), &grid, &index, &catalog).unwrap();
            let max = search.max_distance();
            let mut rings = 0u64;
            let mut seen = 0usize;
            for ring in search {
                let ring = ring.unwrap();
                rings += 1;
                let mut expected: Vec<MarkerId> = grid
                    .markers()
                    .filter(|&(x, y, _)| {
                        vicinity_core::manhattan_distance(q, (i64::from(x), i64::from(y)))
                            == ring.radius
                    })
                    .map(|(_, _, id)| id)
                    .collect();
                expected.sort();
                let got: Vec<MarkerId> = ring.hits.iter().map(|n| n.marker).collect();
                prop_assert_eq!(got, expected);
                seen += ring.hits.len();
            }
            prop_assert_eq!(seen, grid.marker_count());
            prop_assert!(rings <= max + 1);
        }
    }
}
