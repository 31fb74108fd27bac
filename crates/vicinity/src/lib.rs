//! Vicinity: nearest available markers on a sparse integer grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Vicinity sub-crates. For most users, adding `vicinity` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vicinity::prelude::*;
//!
//! // A 3x3 grid in logical coordinates -1..=1.
//! let grid = Grid::from_rows(vec![
//!     vec![Some(MarkerId(303)), None, None],
//!     vec![None, Some(MarkerId(101)), None],
//!     vec![None, None, Some(MarkerId(202))],
//! ])
//! .unwrap();
//! let offers = |pairs: &[(u64, u64)]| -> OfferTable {
//!     pairs.iter().map(|&(p, q)| (Price(p), q)).collect()
//! };
//! let catalog = EventCatalog::new([
//!     (MarkerId(101), offers(&[(500, 10)])),
//!     (MarkerId(202), offers(&[(300, 0), (600, 5)])),
//!     (MarkerId(303), offers(&[(200, 0)])),
//! ])
//! .unwrap();
//! let config = WorldConfig {
//!     origin: Point::new(-1, -1),
//!     ..WorldConfig::default()
//! };
//! let world = World::new(config, grid, catalog).unwrap();
//!
//! let found = world.nearest(Point::new(0, 0), Some(2)).unwrap();
//! assert_eq!(found[0].marker, MarkerId(101));
//! assert_eq!((found[1].distance, found[1].price), (2, Price(600)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vicinity-core` | ids, points, grid, catalog, integrity errors |
//! | [`index`] | `vicinity-index` | diagonal index, ring search, scan, world, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`vicinity-core`).
///
/// Contains [`types::Grid`], [`types::EventCatalog`], the id newtypes, and
/// [`types::IntegrityError`].
pub use vicinity_core as types;

/// Spatial index and search (`vicinity-index`).
///
/// [`index::DiagonalIndex`] and [`index::RingSearch`] for direct use,
/// [`index::World`] for the bundled logical-coordinate API.
pub use vicinity_index as index;

/// Common imports for typical Vicinity usage.
///
/// ```rust
/// use vicinity::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vicinity_core::{EventCatalog, Grid, MarkerId, OfferTable, Point, Price};

    // Errors
    pub use vicinity_core::IntegrityError;
    pub use vicinity_index::ConfigError;

    // Search
    pub use vicinity_index::{
        nearest, DiagonalIndex, Nearby, RingSearch, SearchStats, World, WorldConfig,
    };
}
