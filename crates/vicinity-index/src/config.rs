//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] carries the settings fixed for a world's lifetime: the
//! origin that maps logical coordinates onto the grid and the default
//! result count. [`World::new`](crate::World::new) validates it together
//! with the grid and catalog, reporting failures as [`ConfigError`].

use std::error::Error;
use std::fmt;

use vicinity_core::{Grid, IntegrityError, Point};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or building a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid or catalog violates the loader contract.
    Integrity(IntegrityError),
    /// `result_limit` is `Some(0)`; use `None` for "all markers".
    ZeroResultLimit,
    /// The grid's far corner is not representable in logical coordinates.
    OriginOverflow {
        /// The configured origin.
        origin: Point,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integrity(e) => write!(f, "integrity: {e}"),
            Self::ZeroResultLimit => write!(f, "result_limit must be at least 1 when set"),
            Self::OriginOverflow {
                origin,
                width,
                height,
            } => write!(
                f,
                "a {width}x{height} grid at origin {origin} exceeds the i32 coordinate range"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Integrity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IntegrityError> for ConfigError {
    fn from(e: IntegrityError) -> Self {
        Self::Integrity(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Settings fixed when a [`World`](crate::World) is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Logical coordinate of the grid's `(0, 0)` cell: the minimum
    /// coordinate of the caller's system. Default: `(0, 0)`.
    pub origin: Point,
    /// Number of results returned by
    /// [`World::nearest_default`](crate::World::nearest_default).
    /// `None` returns every available marker. Default: `Some(5)`.
    pub result_limit: Option<usize>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            result_limit: Some(5),
        }
    }
}

impl WorldConfig {
    /// Validate settings that do not depend on the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_limit == Some(0) {
            return Err(ConfigError::ZeroResultLimit);
        }
        Ok(())
    }

    /// Logical coordinates of the grid's first and last cells.
    ///
    /// Returns `Err(ConfigError::OriginOverflow)` if the last cell lies
    /// beyond `i32::MAX` on either axis.
    pub fn logical_bounds(&self, grid: &Grid) -> Result<(Point, Point), ConfigError> {
        let overflow = || ConfigError::OriginOverflow {
            origin: self.origin,
            width: grid.width(),
            height: grid.height(),
        };
        let last = |start: i32, len: u32| {
            i32::try_from(i64::from(start) + i64::from(len) - 1).map_err(|_| overflow())
        };
        let max = Point::new(
            last(self.origin.x, grid.width())?,
            last(self.origin.y, grid.height())?,
        );
        Ok((self.origin, max))
    }
}
