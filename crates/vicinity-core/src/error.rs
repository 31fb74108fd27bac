//! Error types for the Vicinity core.
//!
//! Every variant of [`IntegrityError`] means the in-memory inputs violate
//! the loader contract. None of them are recoverable: callers surface them
//! instead of guessing a repair.

use crate::id::{MarkerId, Price};
use std::error::Error;
use std::fmt;

/// The grid, catalog, or index handed to the core is structurally broken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// The grid has zero rows or zero columns.
    EmptyGrid,
    /// A grid row does not have the width of the first row.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width established by row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A grid dimension does not fit the 32-bit coordinate range.
    DimensionTooLarge {
        /// Which axis overflowed (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The largest accepted size.
        max: usize,
    },
    /// The same marker id occupies two cells.
    DuplicateMarker {
        /// The repeated id.
        marker: MarkerId,
        /// Grid-local `(x, y)` of the first occurrence.
        first: (u32, u32),
        /// Grid-local `(x, y)` of the second occurrence.
        second: (u32, u32),
    },
    /// A marker placed on the grid has no entry in the catalog.
    ///
    /// Distinct from "sold out": it means the loader dropped data.
    MissingOffers {
        /// The marker without offer data.
        marker: MarkerId,
    },
    /// An offer table contains a non-positive price.
    InvalidPrice {
        /// The marker owning the offer table.
        marker: MarkerId,
        /// The rejected price.
        price: Price,
    },
    /// A diagonal index was queried against a grid it was not built from.
    IndexMismatch {
        /// `(width, height)` recorded by the index.
        index: (u32, u32),
        /// `(width, height)` of the grid passed to the search.
        grid: (u32, u32),
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "grid row {row} has {found} cells, expected {expected}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "marker {marker} appears at both {first:?} and {second:?}"
            ),
            Self::MissingOffers { marker } => {
                write!(f, "marker {marker} has no offer data in the catalog")
            }
            Self::InvalidPrice { marker, price } => {
                write!(f, "marker {marker} lists non-positive price {price}")
            }
            Self::IndexMismatch { index, grid } => write!(
                f,
                "index built for a {}x{} grid queried against a {}x{} grid",
                index.0, index.1, grid.0, grid.1
            ),
        }
    }
}

impl Error for IntegrityError {}
