//! Benchmark profiles and utilities for the Vicinity search.
//!
//! Provides pre-built [`World`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 21x21 grid, origin (-10,-10), one candidate id per cell
//! - [`stress_profile`]: 2001x2001 grid (~4M cells), origin (-1000,-1000), 10K candidate ids
//! - [`query_points`]: deterministic query placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use vicinity_core::Point;
use vicinity_index::{World, WorldConfig};
use vicinity_test_utils::{generate_catalog, generate_grid, sample_marker_ids, seeded};

/// Ids are drawn from `0..MARKER_ID_SPACE`.
pub const MARKER_ID_SPACE: usize = 1_000_000_000;

/// Build a seeded world of `size × size` cells centred on the logical origin.
///
/// `size` must be odd so the grid spans `-size/2..=size/2` on both axes.
pub fn centred_world(seed: u64, size: usize, candidates: usize) -> World {
    let half = i32::try_from(size / 2).expect("profile size fits i32");
    let mut rng = seeded(seed);
    let ids = sample_marker_ids(&mut rng, candidates, MARKER_ID_SPACE);
    let grid = generate_grid(&mut rng, size, size, &ids);
    let catalog = generate_catalog(&mut rng, &ids);
    let config = WorldConfig {
        origin: Point::new(-half, -half),
        result_limit: Some(10),
    };
    World::new(config, grid, catalog).expect("generated profile is consistent")
}

/// Build the reference profile: 21x21 grid with 441 candidate ids.
///
/// Roughly one cell in ten ends up occupied.
pub fn reference_profile(seed: u64) -> World {
    centred_world(seed, 21, 21 * 21)
}

/// Build the stress profile: 2001x2001 grid with 10K candidate ids.
///
/// Placement probability is `10_000 / (2 * 2001^2)`, so about half of the
/// candidates are placed and the grid is overwhelmingly empty.
pub fn stress_profile(seed: u64) -> World {
    centred_world(seed, 2001, 10_000)
}

/// `count` deterministic query points with both coordinates in `lo..=hi`.
pub fn query_points(seed: u64, count: usize, lo: i32, hi: i32) -> Vec<Point> {
    let mut rng = seeded(seed);
    (0..count)
        .map(|_| Point::new(rng.random_range(lo..=hi), rng.random_range(lo..=hi)))
        .collect()
}
