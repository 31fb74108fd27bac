//! The [`World`]: a grid, its catalog, and the derived index.

use crate::config::{ConfigError, WorldConfig};
use crate::diagonal::DiagonalIndex;
use crate::scan;
use crate::search::{self, Nearby, RingSearch};
use crate::stats::SearchStats;
use tracing::debug;
use vicinity_core::{EventCatalog, Grid, IntegrityError, MarkerId, Point, Price};

/// An immutable, query-ready view of one grid and its offers.
///
/// Construction validates the configuration, checks that every marker on
/// the grid has catalog data, and builds the [`DiagonalIndex`] once. All
/// queries take logical points and translate them through the configured
/// origin.
///
/// `World` is `Send + Sync` and never mutated after construction, so it
/// can be shared across threads (e.g. behind an `Arc`) and queried
/// concurrently without locking.
///
/// # Examples
///
/// ```
/// use vicinity_core::{EventCatalog, Grid, MarkerId, OfferTable, Point, Price};
/// use vicinity_index::{World, WorldConfig};
///
/// let grid = Grid::from_rows(vec![vec![None, Some(MarkerId(1))]]).unwrap();
/// let offers: OfferTable = [(Price(999), 2)].into_iter().collect();
/// let catalog = EventCatalog::new([(MarkerId(1), offers)]).unwrap();
/// let config = WorldConfig { origin: Point::new(-1, 0), ..WorldConfig::default() };
///
/// let world = World::new(config, grid, catalog).unwrap();
/// assert_eq!(world.marker_at(Point::new(0, 0)), Some(MarkerId(1)));
/// let found = world.nearest_default(Point::new(-1, 0)).unwrap();
/// assert_eq!(found[0].distance, 1);
/// ```
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    grid: Grid,
    catalog: EventCatalog,
    index: DiagonalIndex,
    bounds: (Point, Point),
}

impl World {
    /// Validate inputs and build the index.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `config` fails [`WorldConfig::validate`]
    /// - the grid's logical extent overflows `i32` at the configured origin
    /// - a marker on the grid has no catalog entry
    ///   (`ConfigError::Integrity(IntegrityError::MissingOffers)`)
    pub fn new(config: WorldConfig, grid: Grid, catalog: EventCatalog) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.logical_bounds(&grid)?;
        if let Some((_, _, marker)) = grid.markers().find(|&(_, _, m)| !catalog.contains(m)) {
            return Err(IntegrityError::MissingOffers { marker }.into());
        }
        let index = DiagonalIndex::build(&grid, config.origin);

        debug!(
            origin = %config.origin,
            width = grid.width(),
            height = grid.height(),
            markers = grid.marker_count(),
            catalog = catalog.len(),
            available = catalog.available_markers(),
            "world ready"
        );

        Ok(Self {
            config,
            grid,
            catalog,
            index,
            bounds,
        })
    }

    /// The marker at logical `point`, or `None` if empty or off-grid.
    pub fn marker_at(&self, point: Point) -> Option<MarkerId> {
        let (x, y) = self.index.to_local(point);
        self.grid.get(x, y)
    }

    /// Cheapest available price of the marker at logical `point`.
    ///
    /// `Ok(None)` if the cell is empty, off-grid, or sold out.
    pub fn lowest_price_at(&self, point: Point) -> Result<Option<Price>, IntegrityError> {
        match self.marker_at(point) {
            Some(marker) => self.catalog.lowest_available_price(marker),
            None => Ok(None),
        }
    }

    /// Cheapest available price of `marker`; see
    /// [`EventCatalog::lowest_available_price`].
    pub fn lowest_price(&self, marker: MarkerId) -> Result<Option<Price>, IntegrityError> {
        self.catalog.lowest_available_price(marker)
    }

    /// The `limit` nearest available markers to `point`; see [`search::nearest`].
    pub fn nearest(&self, point: Point, limit: Option<usize>) -> Result<Vec<Nearby>, IntegrityError> {
        search::nearest(point, &self.grid, &self.index, &self.catalog, limit)
    }

    /// Nearest markers using the configured `result_limit`.
    pub fn nearest_default(&self, point: Point) -> Result<Vec<Nearby>, IntegrityError> {
        self.nearest(point, self.config.result_limit)
    }

    /// Like [`World::nearest`], also returning the search's work counters.
    pub fn nearest_with_stats(
        &self,
        point: Point,
        limit: Option<usize>,
    ) -> Result<(Vec<Nearby>, SearchStats), IntegrityError> {
        search::nearest_with_stats(point, &self.grid, &self.index, &self.catalog, limit)
    }

    /// The same query answered by a full scan; see [`scan::nearest_by_scan`].
    pub fn nearest_by_scan(
        &self,
        point: Point,
        limit: Option<usize>,
    ) -> Result<Vec<Nearby>, IntegrityError> {
        scan::nearest_by_scan(point, self.config.origin, &self.grid, &self.catalog, limit)
    }

    /// A ring-by-ring search around `point` that the caller may abandon.
    pub fn rings(&self, point: Point) -> Result<RingSearch<'_>, IntegrityError> {
        RingSearch::new(point, &self.grid, &self.index, &self.catalog)
    }

    /// Logical coordinates of the first and last grid cells.
    pub fn bounds(&self) -> (Point, Point) {
        self.bounds
    }

    /// Whether logical `point` lies on the grid.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = self.index.to_local(point);
        self.grid.contains(x, y)
    }

    /// The configuration this world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The offer catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// The diagonal index derived from the grid.
    pub fn index(&self) -> &DiagonalIndex {
        &self.index
    }
}
