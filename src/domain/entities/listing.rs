//! # Listing Entity
//!
//! A supplier's offer of a capacity block at a fixed block price.
//!
//! This module provides the [`Listing`] struct, the input row of an
//! allocation run. The block price buys the entire capacity block; the
//! derived unit price is what partial fills are charged at.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::domain::entities::Listing;
//! use charter_alloc::domain::value_objects::{Money, Units};
//!
//! let listing = Listing::new(
//!     "Container renter B",
//!     Units::new(2.0).unwrap(),
//!     Money::new(1.0).unwrap(),
//! ).unwrap();
//!
//! assert_eq!(listing.unit_price().unwrap(), Money::new(0.5).unwrap());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ListingId, Money, SupplierName, Units};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supplier's offer: a capacity block at a fixed total price.
///
/// # Invariants
///
/// - `capacity` is strictly positive (the unit price would otherwise be
///   undefined)
/// - `block_price` is non-negative; zero is legal and means free capacity
///
/// # Examples
///
/// ```
/// use charter_alloc::domain::entities::Listing;
/// use charter_alloc::domain::value_objects::{Money, Units};
///
/// let listing = Listing::new(
///     "Container renter C",
///     Units::new(10.0).unwrap(),
///     Money::new(3.0).unwrap(),
/// ).unwrap();
///
/// assert!(listing.capacity().is_positive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Listing {
    /// Listing identity, generated when absent from a catalog row.
    #[serde(default = "ListingId::new_v4")]
    id: ListingId,
    /// Supplier label, carried through for reporting.
    supplier: SupplierName,
    /// Quantity of capacity units offered.
    capacity: Units,
    /// Total price charged for taking the entire capacity block.
    block_price: Money,
}

impl Listing {
    /// Creates a new listing with validation, generating a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidListing` if `capacity` is not
    /// strictly positive.
    pub fn new(
        supplier: impl Into<SupplierName>,
        capacity: Units,
        block_price: Money,
    ) -> DomainResult<Self> {
        let supplier = supplier.into();
        if !capacity.is_positive() {
            return Err(DomainError::invalid_listing(
                supplier.as_str(),
                "capacity must be positive",
            ));
        }
        Ok(Self {
            id: ListingId::new_v4(),
            supplier,
            capacity,
            block_price,
        })
    }

    /// Creates a listing without validation (for reconstruction from storage).
    ///
    /// # Safety
    ///
    /// This method bypasses validation and should only be used when
    /// reconstructing from trusted storage.
    #[must_use]
    pub fn from_parts(
        id: ListingId,
        supplier: SupplierName,
        capacity: Units,
        block_price: Money,
    ) -> Self {
        Self {
            id,
            supplier,
            capacity,
            block_price,
        }
    }

    /// Returns the listing id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the supplier label.
    #[inline]
    #[must_use]
    pub fn supplier(&self) -> &SupplierName {
        &self.supplier
    }

    /// Returns the offered capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> Units {
        self.capacity
    }

    /// Returns the price of the entire capacity block.
    #[inline]
    #[must_use]
    pub fn block_price(&self) -> Money {
        self.block_price
    }

    /// Returns the derived price per capacity unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if `capacity` is zero, which can
    /// only happen for listings built through [`Listing::from_parts`] or
    /// deserialized from untrusted input.
    pub fn unit_price(&self) -> DomainResult<Money> {
        Ok(self.block_price.safe_div(self.capacity.get())?)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Listing(supplier={}, capacity={}, block_price={})",
            self.supplier, self.capacity, self.block_price,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_listing() -> Listing {
        Listing::new(
            "Container renter A",
            Units::new(5.0).unwrap(),
            Money::new(5.0).unwrap(),
        )
        .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_creates_valid_listing() {
            let listing = test_listing();
            assert_eq!(listing.supplier().as_str(), "Container renter A");
            assert_eq!(listing.capacity(), Units::new(5.0).unwrap());
            assert_eq!(listing.block_price(), Money::new(5.0).unwrap());
        }

        #[test]
        fn new_rejects_zero_capacity() {
            let result = Listing::new(
                "renter X",
                Units::zero(),
                Money::new(1.0).unwrap(),
            );
            assert!(matches!(
                result,
                Err(DomainError::InvalidListing { .. })
            ));
        }

        #[test]
        fn new_accepts_free_capacity() {
            let listing =
                Listing::new("charity", Units::new(4.0).unwrap(), Money::zero()).unwrap();
            assert!(listing.unit_price().unwrap().is_zero());
        }

        #[test]
        fn from_parts_bypasses_validation() {
            let listing = Listing::from_parts(
                ListingId::new_v4(),
                SupplierName::new("renter X"),
                Units::zero(),
                Money::zero(),
            );
            assert!(listing.capacity().is_zero());
        }
    }

    mod unit_price {
        use super::*;

        #[test]
        fn derived_from_block_price() {
            let listing = Listing::new(
                "Container renter B",
                Units::new(2.0).unwrap(),
                Money::new(1.0).unwrap(),
            )
            .unwrap();
            assert_eq!(listing.unit_price().unwrap(), Money::new(0.5).unwrap());
        }

        #[test]
        fn undefined_for_zero_capacity() {
            let listing = Listing::from_parts(
                ListingId::new_v4(),
                SupplierName::new("renter X"),
                Units::zero(),
                Money::new(1.0).unwrap(),
            );
            assert!(matches!(
                listing.unit_price(),
                Err(DomainError::Arithmetic(_))
            ));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let listing = test_listing();
            let json = serde_json::to_string(&listing).unwrap();
            let deserialized: Listing = serde_json::from_str(&json).unwrap();
            assert_eq!(listing, deserialized);
        }

        #[test]
        fn catalog_row_without_id_gets_one() {
            let json = r#"{"supplier": "renter A", "capacity": 1, "block_price": 1}"#;
            let listing: Listing = serde_json::from_str(json).unwrap();
            assert_eq!(listing.supplier().as_str(), "renter A");
            assert_eq!(listing.capacity(), Units::new(1.0).unwrap());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn display_format() {
            let display = test_listing().to_string();
            assert!(display.contains("Listing"));
            assert!(display.contains("Container renter A"));
        }
    }
}
