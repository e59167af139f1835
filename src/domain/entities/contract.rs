//! # Contract Entity
//!
//! Units taken from one listing and the price charged for them.
//!
//! This module provides the [`Contract`] struct, one leg of a
//! multi-supplier fill: how much of a listing's capacity block the
//! allocator took and the pro-rated charge for it.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::domain::entities::Contract;
//! use charter_alloc::domain::value_objects::{ListingId, Money, SupplierName, Units};
//!
//! let contract = Contract::new(
//!     ListingId::new_v4(),
//!     SupplierName::new("Container renter B"),
//!     Units::new(2.0).unwrap(),
//!     Money::new(1.0).unwrap(),
//!     Money::new(1.0).unwrap(),
//! ).unwrap();
//!
//! assert_eq!(contract.units_taken(), Units::new(2.0).unwrap());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ListingId, Money, SupplierName, Units};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units taken from one listing and the price charged for them.
///
/// Contracts are produced in allocation order (ascending unit price),
/// not in the input order of the listings.
///
/// # Invariants
///
/// - `units_taken` is strictly positive and never exceeds the listing's
///   capacity
/// - `price_charged == units_taken * unit_price` of the listing; zero is
///   legal for free capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Contract {
    /// The listing this contract draws from.
    listing_id: ListingId,
    /// Supplier label, for reporting.
    supplier: SupplierName,
    /// Quantity of capacity units taken.
    units_taken: Units,
    /// Pro-rated charge for the units taken.
    price_charged: Money,
    /// The listing's original block price, carried for the transcript.
    block_price: Money,
}

impl Contract {
    /// Creates a new contract with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnits` if `units_taken` is not
    /// strictly positive.
    pub fn new(
        listing_id: ListingId,
        supplier: SupplierName,
        units_taken: Units,
        price_charged: Money,
        block_price: Money,
    ) -> DomainResult<Self> {
        if !units_taken.is_positive() {
            return Err(DomainError::invalid_units(
                "contracted units must be positive",
            ));
        }
        Ok(Self {
            listing_id,
            supplier,
            units_taken,
            price_charged,
            block_price,
        })
    }

    /// Returns the id of the listing this contract draws from.
    #[inline]
    #[must_use]
    pub fn listing_id(&self) -> ListingId {
        self.listing_id
    }

    /// Returns the supplier label.
    #[inline]
    #[must_use]
    pub fn supplier(&self) -> &SupplierName {
        &self.supplier
    }

    /// Returns the quantity of units taken.
    #[inline]
    #[must_use]
    pub fn units_taken(&self) -> Units {
        self.units_taken
    }

    /// Returns the pro-rated charge for the units taken.
    #[inline]
    #[must_use]
    pub fn price_charged(&self) -> Money {
        self.price_charged
    }

    /// Returns the listing's original block price.
    #[inline]
    #[must_use]
    pub fn block_price(&self) -> Money {
        self.block_price
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract(supplier={}, units={}, charged={})",
            self.supplier, self.units_taken, self.price_charged,
        )
    }
}
