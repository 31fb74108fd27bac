//! Full-grid scan: the naive nearest-marker query.
//!
//! Visits every occupied cell, so it costs O(markers log markers) per
//! query regardless of where the query lands. Kept as the reference the
//! ring search must agree with, and as a benchmark baseline.

use crate::search::Nearby;
use vicinity_core::{manhattan_distance, EventCatalog, Grid, IntegrityError, Point};

/// The `limit` nearest available markers to `query`, by scanning every cell.
///
/// `origin` is the logical coordinate of grid-local `(0, 0)`. Ordering,
/// sold-out filtering, and `MissingOffers` behave exactly as in
/// [`nearest`](crate::nearest), except that a missing catalog entry is
/// reported even when it lies beyond `limit`.
pub fn nearest_by_scan(
    query: Point,
    origin: Point,
    grid: &Grid,
    catalog: &EventCatalog,
    limit: Option<usize>,
) -> Result<Vec<Nearby>, IntegrityError> {
    let q = query.local_to(origin);
    let mut found = Vec::with_capacity(grid.marker_count());
    for (x, y, marker) in grid.markers() {
        if let Some(price) = catalog.lowest_available_price(marker)? {
            found.push(Nearby {
                distance: manhattan_distance(q, (i64::from(x), i64::from(y))),
                price,
                marker,
            });
        }
    }
    found.sort_unstable();
    if let Some(k) = limit {
        found.truncate(k);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vicinity_core::{MarkerId, OfferTable, Price};

    #[test]
    fn scan_sorts_and_truncates() {
        let grid = Grid::from_rows(vec![
            vec![Some(MarkerId(5)), None, Some(MarkerId(6))],
            vec![None, Some(MarkerId(7)), None],
        ])
        .unwrap();
        let offers = |p: u64, q: u64| -> OfferTable { [(Price(p), q)].into_iter().collect() };
        let catalog = EventCatalog::new([
            (MarkerId(5), offers(100, 1)),
            (MarkerId(6), offers(90, 1)),
            (MarkerId(7), offers(10, 0)),
        ])
        .unwrap();
        // Origin (-2,-2): logical (-1,-1) is local (1,1), the cell of marker 7.
        let all = nearest_by_scan(Point::new(-1, -1), Point::new(-2, -2), &grid, &catalog, None)
            .unwrap();
        let got: Vec<(u64, u64, u64)> = all
            .iter()
            .map(|n| (n.distance, n.price.0, n.marker.0))
            .collect();
        assert_eq!(got, vec![(2, 90, 6), (2, 100, 5)]);

        let one = nearest_by_scan(Point::new(-1, -1), Point::new(-2, -2), &grid, &catalog, Some(1))
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].marker, MarkerId(6));
    }

    #[test]
    fn scan_reports_missing_offers() {
        let grid = Grid::from_rows(vec![vec![Some(MarkerId(1))]]).unwrap();
        assert_eq!(
            nearest_by_scan(Point::default(), Point::default(), &grid, &EventCatalog::default(), Some(0)),
            Err(IntegrityError::MissingOffers {
                marker: MarkerId(1)
            })
        );
    }
}
