//! Spatial index and nearest-marker search for Vicinity.
//!
//! This crate turns a [`Grid`](vicinity_core::Grid) into a
//! [`DiagonalIndex`] and answers "which available markers are closest to
//! this point" with an expanding-ring search over it.
//!
//! # Search
//!
//! The cells at Manhattan distance `d` from a query point form a diamond
//! whose four edges each lie on a single diagonal (`x + y` constant) or
//! anti-diagonal (`x - y` constant). [`DiagonalIndex`] keeps markers grouped
//! by both diagonal families and sorted by `x`, so each edge is one
//! binary-searched slice. [`RingSearch`] walks the diamonds outward from the
//! query and stops once enough markers are found.
//!
//! # World
//!
//! [`World`] bundles a grid, its catalog, the derived index, and a
//! validated [`WorldConfig`] behind a logical-coordinate API.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub(crate) mod bounds;
pub mod config;
pub mod diagonal;
pub mod scan;
pub mod search;
pub mod stats;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use diagonal::{DiagonalEntry, DiagonalIndex, Family};
pub use scan::nearest_by_scan;
pub use search::{nearest, nearest_with_stats, Nearby, Ring, RingSearch};
pub use stats::SearchStats;
pub use world::World;
