//! Hand-written fixtures with known answers.

use vicinity_core::{EventCatalog, Grid, MarkerId, OfferTable, Price};

/// Build an offer table from `(price, quantity)` pairs.
pub fn offers(pairs: &[(u64, u64)]) -> OfferTable {
    pairs.iter().map(|&(p, q)| (Price(p), q)).collect()
}

/// The 3x3 reference scenario, logical coordinates 0..=2 on both axes.
///
/// | marker | cell | offers | lowest |
/// |--------|------|--------|--------|
/// | 101 | (1,1) | 500 × 10 | 500 |
/// | 202 | (2,2) | 300 × 0, 600 × 5 | 600 |
/// | 303 | (0,0) | 200 × 0 | sold out |
pub fn three_by_three() -> (Grid, EventCatalog) {
    let grid = Grid::from_rows(vec![
        vec![Some(MarkerId(303)), None, None],
        vec![None, Some(MarkerId(101)), None],
        vec![None, None, Some(MarkerId(202))],
    ])
    .expect("fixture grid is rectangular with unique markers");
    let catalog = EventCatalog::new([
        (MarkerId(101), offers(&[(500, 10)])),
        (MarkerId(202), offers(&[(300, 0), (600, 5)])),
        (MarkerId(303), offers(&[(200, 0)])),
    ])
    .expect("fixture prices are positive");
    (grid, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_matches_table() {
        let (grid, catalog) = three_by_three();
        assert_eq!(grid.marker_count(), 3);
        assert_eq!(grid.get(1, 1), Some(MarkerId(101)));
        assert_eq!(catalog.lowest_available_price(MarkerId(202)), Ok(Some(Price(600))));
        assert_eq!(catalog.lowest_available_price(MarkerId(303)), Ok(None));
    }
}
