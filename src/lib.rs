//! # charter-alloc
//!
//! Cost-minimizing capacity allocation engine for container charter
//! marketplaces.
//!
//! Given a required quantity of capacity units and a set of supplier
//! listings each offering a capacity block at a fixed block price, the
//! engine determines which suppliers to contract with, how much capacity
//! to take from each, and the total price, such that total cost is
//! minimized and demand is satisfied as far as possible. Capacity is
//! divisible within a listing, so a cheapest-unit-price-first greedy
//! fill is optimal.
//!
//! The engine is a pure, synchronous function of its inputs: no I/O, no
//! shared state, no mutation of the caller's listing collection. The
//! surrounding marketplace is responsible for sourcing listings and for
//! persisting the returned contracts.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::{Listing, Money, Transcript, Units, allocate};
//!
//! let listings = vec![
//!     Listing::new("Container renter A", Units::new(1.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//!     Listing::new("Container renter B", Units::new(2.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//!     Listing::new("Container renter C", Units::new(3.0).unwrap(), Money::new(3.0).unwrap()).unwrap(),
//! ];
//!
//! let result = allocate(Units::new(3.0).unwrap(), &listings).unwrap();
//! assert_eq!(result.total_cost, Money::new(2.0).unwrap());
//!
//! println!("{}", Transcript::from_result(&result));
//! ```

pub mod application;
pub mod domain;

pub use application::services::allocation::{
    AllocationEngine, AllocationRequest, AllocationResult, AllocatorConfig, InvalidListingPolicy,
};
pub use application::services::ordering::{OrderedListing, order_by_unit_price};
pub use application::services::transcript::Transcript;
pub use domain::entities::{Contract, Listing};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::value_objects::{ListingId, Money, SupplierName, Units};

/// Allocates the requested quantity across the given listings at minimum
/// total cost, using the default engine configuration.
///
/// Convenience wrapper over [`AllocationEngine::allocate`].
///
/// # Errors
///
/// Returns `DomainError::InvalidListing` on a malformed listing row (the
/// default policy rejects the whole call) and `DomainError::Arithmetic`
/// on checked-arithmetic failure.
pub fn allocate(needed_units: Units, listings: &[Listing]) -> DomainResult<AllocationResult> {
    AllocationEngine::default().allocate(&AllocationRequest::new(needed_units), listings)
}
