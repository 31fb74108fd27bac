//! Test utilities for Vicinity development.
//!
//! - [`fixtures`]: small hand-written grids with known answers.
//! - [`generate`]: seeded random grids and catalogs for property tests and
//!   benchmarks. Every generator takes its RNG explicitly, so a seed fully
//!   determines the data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;

pub use fixtures::{offers, three_by_three};
pub use generate::{generate_catalog, generate_grid, sample_marker_ids, seeded};
