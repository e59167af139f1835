//! # Listing Ordering
//!
//! Orders supplier listings by effective unit price, cheapest first.
//!
//! This module provides [`OrderedListing`] and [`order_by_unit_price`],
//! the normalization step feeding the greedy allocator. The ordering is
//! stable: listings with equal unit prices keep their relative input
//! order, so repeated runs on the same input produce identical contract
//! sequences.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::application::services::ordering::order_by_unit_price;
//! use charter_alloc::domain::entities::Listing;
//! use charter_alloc::domain::value_objects::{Money, Units};
//!
//! let listings = vec![
//!     Listing::new("A", Units::new(1.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//!     Listing::new("B", Units::new(2.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//! ];
//!
//! let ordered = order_by_unit_price(&listings).unwrap();
//! // B's unit price (0.5) beats A's (1.0)
//! assert_eq!(ordered[0].listing.supplier().as_str(), "B");
//! assert!(ordered[0].is_cheapest());
//! ```

use crate::domain::entities::Listing;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A listing with its position in the cheapest-first ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListing {
    /// The listing being ordered.
    pub listing: Listing,
    /// The listing's effective unit price, precomputed for the fill loop.
    pub unit_price: Money,
    /// The position in the ordering (1 = cheapest).
    pub rank: usize,
}

impl OrderedListing {
    /// Creates a new ordered listing.
    #[must_use]
    pub fn new(listing: Listing, unit_price: Money, rank: usize) -> Self {
        Self {
            listing,
            unit_price,
            rank,
        }
    }

    /// Returns true if this listing is the cheapest (rank 1).
    #[must_use]
    pub fn is_cheapest(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for OrderedListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderedListing(#{} unit_price={} listing={})",
            self.rank, self.unit_price, self.listing
        )
    }
}

/// Orders listings by non-decreasing unit price.
///
/// The input slice is never mutated; the ordering is produced on a
/// working copy so callers can reuse the listing set for other runs.
/// The sort is stable: equal unit prices keep their input order.
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if a listing's unit price is
/// undefined (zero capacity, only reachable through
/// [`Listing::from_parts`] or untrusted deserialization — the allocation
/// engine screens such rows out before ordering).
pub fn order_by_unit_price(listings: &[Listing]) -> DomainResult<Vec<OrderedListing>> {
    let mut keyed: Vec<(Money, Listing)> = Vec::with_capacity(listings.len());
    for listing in listings {
        keyed.push((listing.unit_price()?, listing.clone()));
    }

    // Vec::sort_by is stable; exact Decimal keys make the comparison total.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed
        .into_iter()
        .enumerate()
        .map(|(i, (unit_price, listing))| OrderedListing::new(listing, unit_price, i + 1))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ListingId, SupplierName, Units};

    fn listing(supplier: &str, capacity: f64, block_price: f64) -> Listing {
        Listing::new(
            supplier,
            Units::new(capacity).unwrap(),
            Money::new(block_price).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn orders_by_unit_price_ascending() {
        // Unit prices: A=1, B=0.5, C=1
        let listings = vec![
            listing("A", 1.0, 1.0),
            listing("B", 2.0, 1.0),
            listing("C", 3.0, 3.0),
        ];

        let ordered = order_by_unit_price(&listings).unwrap();

        assert_eq!(ordered.len(), 3);
        assert_eq!(ordered[0].listing.supplier().as_str(), "B");
        assert_eq!(ordered[0].unit_price, Money::new(0.5).unwrap());
        assert_eq!(ordered[0].rank, 1);
        assert!(ordered[0].is_cheapest());
        assert!(!ordered[1].is_cheapest());
    }

    #[test]
    fn equal_unit_prices_keep_input_order() {
        // A and C share unit price 1; A precedes C in the input.
        let listings = vec![
            listing("A", 1.0, 1.0),
            listing("B", 2.0, 1.0),
            listing("C", 3.0, 3.0),
        ];

        let ordered = order_by_unit_price(&listings).unwrap();

        assert_eq!(ordered[1].listing.supplier().as_str(), "A");
        assert_eq!(ordered[2].listing.supplier().as_str(), "C");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let listings = vec![
            listing("A", 4.0, 2.0),
            listing("B", 2.0, 1.0),
            listing("C", 6.0, 3.0),
        ];

        let first = order_by_unit_price(&listings).unwrap();
        let second = order_by_unit_price(&listings).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn input_slice_is_not_reordered() {
        let listings = vec![listing("A", 1.0, 9.0), listing("B", 1.0, 1.0)];
        let before: Vec<String> = listings
            .iter()
            .map(|l| l.supplier().as_str().to_string())
            .collect();

        let _ = order_by_unit_price(&listings).unwrap();

        let after: Vec<String> = listings
            .iter()
            .map(|l| l.supplier().as_str().to_string())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn free_capacity_sorts_first() {
        let listings = vec![listing("paid", 1.0, 5.0), listing("free", 3.0, 0.0)];

        let ordered = order_by_unit_price(&listings).unwrap();

        assert_eq!(ordered[0].listing.supplier().as_str(), "free");
        assert!(ordered[0].unit_price.is_zero());
    }

    #[test]
    fn empty_input_yields_empty_ordering() {
        let ordered = order_by_unit_price(&[]).unwrap();
        assert!(ordered.is_empty());
    }

    #[test]
    fn zero_capacity_row_fails() {
        let bad = Listing::from_parts(
            ListingId::new_v4(),
            SupplierName::new("X"),
            Units::zero(),
            Money::new(1.0).unwrap(),
        );
        assert!(order_by_unit_price(&[bad]).is_err());
    }
}
