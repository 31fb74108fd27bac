//! Seeded synthetic grids and catalogs.
//!
//! Mirrors the shape of real data: markers are sparse (at most one cell
//! in ten), each marker lists up to twenty prices, and roughly half of the
//! listed prices are sold out. The RNG is always passed in; use [`seeded`]
//! for a reproducible stream.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vicinity_core::{EventCatalog, Grid, MarkerId, OfferTable, Price};

/// Largest price generated, in the smallest currency unit.
pub const MAX_PRICE: u64 = 10_000;

/// Largest quantity generated for an available price.
pub const MAX_QUANTITY: u64 = 100_000;

/// Most prices listed for a single marker.
pub const MAX_PRICES_PER_MARKER: u32 = 20;

/// A deterministic RNG for `seed`.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `count` distinct marker ids drawn from `0..below`.
///
/// # Panics
///
/// Panics if `count > below`.
pub fn sample_marker_ids<R: Rng + ?Sized>(rng: &mut R, count: usize, below: usize) -> Vec<MarkerId> {
    index::sample(rng, below, count)
        .into_iter()
        .map(|i| MarkerId(i as u64))
        .collect()
}

/// A `width × height` grid with `markers` placed at random cells, in order.
///
/// Each cell is occupied with probability `min(0.1, n / (2·width·height))`
/// until the markers run out, so small marker sets are spread thinly and
/// not every marker is necessarily placed.
///
/// # Panics
///
/// Panics if either dimension is zero or `markers` contains duplicates.
pub fn generate_grid<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    markers: &[MarkerId],
) -> Grid {
    let cells = (width * height) as f64;
    let p = (markers.len() as f64 / (2.0 * cells)).min(0.1);
    let mut next = markers.iter().copied();
    let rows = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| if rng.random_bool(p) { next.next() } else { None })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("generated grid is rectangular with unique markers")
}

/// Offer tables for `markers`.
///
/// Each marker lists `0..=20` prices in `1..=10_000`; each price is
/// available (quantity `1..=100_000`) with probability one half and sold
/// out otherwise. A price drawn twice keeps its last quantity.
pub fn generate_catalog<R: Rng + ?Sized>(rng: &mut R, markers: &[MarkerId]) -> EventCatalog {
    let entries: Vec<(MarkerId, OfferTable)> = markers
        .iter()
        .map(|&marker| {
            let count = rng.random_range(0..=MAX_PRICES_PER_MARKER);
            let prices: Vec<u64> = (0..count)
                .map(|_| rng.random_range(1..=MAX_PRICE))
                .collect();
            let mut table = OfferTable::new();
            for price in prices {
                let quantity = if rng.random_bool(0.5) {
                    rng.random_range(1..=MAX_QUANTITY)
                } else {
                    0
                };
                table.insert(Price(price), quantity);
            }
            (marker, table)
        })
        .collect();
    EventCatalog::new(entries).expect("generated prices are positive")
}
