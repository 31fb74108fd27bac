//! Core types for the Vicinity nearest-marker search.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! in-memory inputs every search consumes: strongly-typed identifiers,
//! points and distances, the rectangular [`Grid`], the [`EventCatalog`] of
//! per-marker offers, and the [`IntegrityError`] raised when the two are
//! inconsistent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod grid;
pub mod id;
pub mod point;

pub use catalog::{EventCatalog, OfferTable};
pub use error::IntegrityError;
pub use grid::Grid;
pub use id::{MarkerId, Price};
pub use point::{manhattan_distance, Point};
