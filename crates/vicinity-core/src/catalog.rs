//! Per-marker offer tables and the precomputed price catalog.

use crate::error::IntegrityError;
use crate::id::{MarkerId, Price};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Mapping from price to the quantity still available at that price.
///
/// Kept sorted by price so the cheapest available offer is the first
/// entry with a positive quantity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferTable {
    offers: BTreeMap<Price, u64>,
}

impl OfferTable {
    /// An empty table (a marker with no offers is sold out).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the available quantity at `price`, replacing any previous quantity.
    pub fn insert(&mut self, price: Price, quantity: u64) -> Option<u64> {
        self.offers.insert(price, quantity)
    }

    /// Quantity available at exactly `price`.
    pub fn quantity(&self, price: Price) -> Option<u64> {
        self.offers.get(&price).copied()
    }

    /// The smallest price with a positive quantity, or `None` if sold out.
    pub fn lowest_available(&self) -> Option<Price> {
        self.offers
            .iter()
            .find(|(_, &qty)| qty > 0)
            .map(|(&price, _)| price)
    }

    /// Offers in ascending price order.
    pub fn iter(&self) -> impl Iterator<Item = (Price, u64)> + '_ {
        self.offers.iter().map(|(&p, &q)| (p, q))
    }

    /// Number of distinct prices listed.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether no prices are listed.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl FromIterator<(Price, u64)> for OfferTable {
    fn from_iter<I: IntoIterator<Item = (Price, u64)>>(iter: I) -> Self {
        Self {
            offers: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug)]
struct CatalogEntry {
    offers: OfferTable,
    lowest: Option<Price>,
}

/// Offer data for every marker, with lowest prices resolved at build time.
///
/// Prices never change during a query session, so each marker's cheapest
/// available price is computed once and lookups are O(1).
///
/// # Examples
///
/// ```
/// use vicinity_core::{EventCatalog, MarkerId, OfferTable, Price};
///
/// let offers: OfferTable = [(Price(300), 0), (Price(600), 5)].into_iter().collect();
/// let catalog = EventCatalog::new([(MarkerId(202), offers)]).unwrap();
/// assert_eq!(catalog.lowest_available_price(MarkerId(202)), Ok(Some(Price(600))));
/// assert!(catalog.lowest_available_price(MarkerId(1)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventCatalog {
    entries: IndexMap<MarkerId, CatalogEntry>,
    available: usize,
}

impl EventCatalog {
    /// Build a catalog from `(marker, offers)` pairs.
    ///
    /// If a marker is listed twice, the later table wins. Returns
    /// `Err(IntegrityError::InvalidPrice)` if any table lists a price of zero.
    pub fn new<I>(offers: I) -> Result<Self, IntegrityError>
    where
        I: IntoIterator<Item = (MarkerId, OfferTable)>,
    {
        let mut entries = IndexMap::new();
        for (marker, table) in offers {
            if let Some((price, _)) = table.iter().find(|(p, _)| p.0 == 0) {
                return Err(IntegrityError::InvalidPrice { marker, price });
            }
            let lowest = table.lowest_available();
            entries.insert(
                marker,
                CatalogEntry {
                    offers: table,
                    lowest,
                },
            );
        }
        let available = entries.values().filter(|e| e.lowest.is_some()).count();
        Ok(Self { entries, available })
    }

    /// Cheapest available price of `marker`; `Ok(None)` when sold out.
    ///
    /// Returns `Err(IntegrityError::MissingOffers)` if the catalog has no
    /// entry for `marker`: that is a loader contract violation, not a
    /// sold-out marker.
    pub fn lowest_available_price(&self, marker: MarkerId) -> Result<Option<Price>, IntegrityError> {
        self.entries
            .get(&marker)
            .map(|e| e.lowest)
            .ok_or(IntegrityError::MissingOffers { marker })
    }

    /// The raw offer table of `marker`.
    pub fn offers(&self, marker: MarkerId) -> Option<&OfferTable> {
        self.entries.get(&marker).map(|e| &e.offers)
    }

    /// Whether `marker` has an entry.
    pub fn contains(&self, marker: MarkerId) -> bool {
        self.entries.contains_key(&marker)
    }

    /// Number of markers with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of markers with at least one available offer.
    pub fn available_markers(&self) -> usize {
        self.available
    }

    /// Marker ids in insertion order.
    pub fn markers(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.entries.keys().copied()
    }
}
