//! # Allocation Engine
//!
//! Cost-minimizing greedy allocation of demand across supplier listings.
//!
//! This module provides the [`AllocationEngine`], which screens raw
//! listings, orders them cheapest-first, and walks the ordering in a
//! single pass, taking as much of the remaining demand as each listing
//! can satisfy. Capacity is divisible within a listing and each listing's
//! unit price is constant, so cheapest-first is optimal for any
//! achievable quantity by the usual exchange argument. Whole-unit or
//! all-or-nothing contracts would break that guarantee and need a
//! knapsack formulation instead; this engine assumes the divisible case.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::application::services::allocation::{
//!     AllocationEngine, AllocationRequest,
//! };
//! use charter_alloc::domain::entities::Listing;
//! use charter_alloc::domain::value_objects::{Money, Units};
//!
//! let listings = vec![
//!     Listing::new("A", Units::new(1.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//!     Listing::new("B", Units::new(2.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//!     Listing::new("C", Units::new(3.0).unwrap(), Money::new(3.0).unwrap()).unwrap(),
//! ];
//!
//! let engine = AllocationEngine::default();
//! let request = AllocationRequest::new(Units::new(3.0).unwrap());
//! let result = engine.allocate(&request, &listings).unwrap();
//!
//! assert_eq!(result.total_cost, Money::new(2.0).unwrap());
//! assert!(!result.shortage);
//! ```

use crate::application::services::ordering::order_by_unit_price;
use crate::domain::entities::{Contract, Listing};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, Units};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a malformed listing row (non-positive capacity or
/// negative block price).
///
/// The default is [`Reject`](InvalidListingPolicy::Reject): failing the
/// whole call surfaces upstream data-entry bugs instead of letting them
/// silently change allocation outcomes between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidListingPolicy {
    /// Fail the entire call with no partial result.
    #[default]
    Reject,
    /// Drop the malformed row and continue with the rest.
    Skip,
}

impl fmt::Display for InvalidListingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "Reject"),
            Self::Skip => write!(f, "Skip"),
        }
    }
}

/// Configuration for the allocation engine.
#[derive(Debug, Clone, Default)]
pub struct AllocatorConfig {
    /// How malformed listing rows are handled.
    pub invalid_listing_policy: InvalidListingPolicy,
}

impl AllocatorConfig {
    /// Sets the invalid-listing policy.
    #[must_use]
    pub fn with_invalid_listing_policy(mut self, policy: InvalidListingPolicy) -> Self {
        self.invalid_listing_policy = policy;
        self
    }
}

/// The demand for one allocation run.
///
/// A zero quantity is a valid, trivial request: no contracts, zero cost.
/// Negative demand is unrepresentable through [`Units`]; raw numeric
/// input is screened by [`AllocationRequest::from_f64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AllocationRequest {
    needed_units: Units,
}

impl AllocationRequest {
    /// Creates a request for the given quantity.
    #[must_use]
    pub fn new(needed_units: Units) -> Self {
        Self { needed_units }
    }

    /// Creates a request from a raw float.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDemand` if the value is negative or
    /// not finite.
    pub fn from_f64(needed_units: f64) -> DomainResult<Self> {
        if !needed_units.is_finite() {
            return Err(DomainError::invalid_demand(
                "requested quantity must be finite",
            ));
        }
        if needed_units < 0.0 {
            return Err(DomainError::invalid_demand(
                "requested quantity must be non-negative",
            ));
        }
        Ok(Self {
            needed_units: Units::new(needed_units)?,
        })
    }

    /// Returns the requested quantity.
    #[inline]
    #[must_use]
    pub fn needed_units(self) -> Units {
        self.needed_units
    }
}

/// Result of one allocation run.
///
/// Shortage is data, not an error: when demand exceeds the total
/// available capacity, the result still carries every contract that
/// could be made at minimum cost for the obtainable quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AllocationResult {
    /// Contracts in allocation order (ascending unit price).
    pub contracts: Vec<Contract>,
    /// Sum of all contract charges.
    pub total_cost: Money,
    /// True if demand could not be fully met.
    pub shortage: bool,
    /// Demand left over after every listing was consulted.
    pub unmet_units: Units,
}

impl AllocationResult {
    /// The result of a zero-demand request.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            contracts: Vec::new(),
            total_cost: Money::zero(),
            shortage: false,
            unmet_units: Units::zero(),
        }
    }

    /// Returns true if the full requested quantity was contracted.
    #[must_use]
    pub fn is_fully_filled(&self) -> bool {
        !self.shortage
    }

    /// Returns the total quantity contracted across all suppliers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the sum overflows.
    pub fn units_contracted(&self) -> DomainResult<Units> {
        let mut total = Units::zero();
        for contract in &self.contracts {
            total = total.safe_add(contract.units_taken())?;
        }
        Ok(total)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Engine allocating demand across supplier listings at minimum cost.
///
/// The engine is a pure function of its inputs: it holds no state
/// between runs, never mutates the caller's listing slice, and is safe
/// to invoke concurrently with independent inputs.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    config: AllocatorConfig,
}

impl AllocationEngine {
    /// Creates a new engine with the given configuration.
    #[must_use]
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates the requested quantity across the given listings at
    /// minimum total cost.
    ///
    /// Listings are consumed cheapest-unit-price-first; each contract
    /// takes `min(remaining, capacity)` and is charged pro rata. The scan
    /// stops as soon as demand is met. If every listing is exhausted
    /// first, the result reports the shortage.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidListing` if a malformed row is found and
    ///   the policy is [`InvalidListingPolicy::Reject`]
    /// - `DomainError::Arithmetic` on checked-arithmetic failure
    /// - `DomainError::AllocationMismatch` if the contracted sum fails
    ///   the post-condition check
    pub fn allocate(
        &self,
        request: &AllocationRequest,
        listings: &[Listing],
    ) -> DomainResult<AllocationResult> {
        let screened = self.screen(listings)?;

        let needed = request.needed_units();
        if needed.is_zero() {
            return Ok(AllocationResult::empty());
        }

        let ordered = order_by_unit_price(&screened)?;

        let mut remaining = needed;
        let mut total_cost = Money::zero();
        let mut contracts = Vec::with_capacity(ordered.len());

        for entry in &ordered {
            if remaining.is_zero() {
                break;
            }

            let take = remaining.min(entry.listing.capacity());
            let charge = entry.unit_price.safe_mul(take.get())?;

            total_cost = total_cost.safe_add(charge)?;
            remaining = remaining.safe_sub(take)?;

            tracing::debug!(
                supplier = %entry.listing.supplier(),
                units = %take,
                charge = %charge,
                "contracted capacity"
            );

            contracts.push(Contract::new(
                entry.listing.id(),
                entry.listing.supplier().clone(),
                take,
                charge,
                entry.listing.block_price(),
            )?);
        }

        let shortage = remaining.is_positive();
        if shortage {
            tracing::warn!(unmet_units = %remaining, "not enough capacity to meet demand");
        }

        let fillable = needed.min(total_capacity(&screened)?);
        let result = AllocationResult {
            contracts,
            total_cost,
            shortage,
            unmet_units: remaining,
        };
        validate_contract_sum(&result, fillable)?;

        Ok(result)
    }

    /// Screens raw listing rows according to the invalid-listing policy.
    fn screen(&self, listings: &[Listing]) -> DomainResult<Vec<Listing>> {
        let mut valid = Vec::with_capacity(listings.len());
        for listing in listings {
            if let Some(reason) = malformed_reason(listing) {
                match self.config.invalid_listing_policy {
                    InvalidListingPolicy::Reject => {
                        return Err(DomainError::invalid_listing(
                            listing.supplier().as_str(),
                            reason,
                        ));
                    }
                    InvalidListingPolicy::Skip => {
                        tracing::warn!(
                            supplier = %listing.supplier(),
                            reason,
                            "skipping malformed listing"
                        );
                        continue;
                    }
                }
            }
            valid.push(listing.clone());
        }
        Ok(valid)
    }
}

// ============================================================================
// Screening and post-conditions
// ============================================================================

/// Returns why a listing row is malformed, or `None` if it is valid.
///
/// Validated constructors make malformed listings unrepresentable; rows
/// reconstructed via [`Listing::from_parts`] or deserialized from
/// untrusted catalogs are what this screen exists for.
fn malformed_reason(listing: &Listing) -> Option<&'static str> {
    if !listing.capacity().is_positive() {
        return Some("capacity must be positive");
    }
    if listing.block_price().get().is_sign_negative() {
        return Some("block price must be non-negative");
    }
    None
}

/// Computes the total capacity across all screened listings.
fn total_capacity(listings: &[Listing]) -> DomainResult<Units> {
    let mut total = Units::zero();
    for listing in listings {
        total = total.safe_add(listing.capacity())?;
    }
    Ok(total)
}

/// Validates that the contracted units add up to the fillable quantity.
fn validate_contract_sum(result: &AllocationResult, expected: Units) -> DomainResult<()> {
    let allocated = result.units_contracted()?;
    if allocated != expected {
        return Err(DomainError::AllocationMismatch {
            allocated,
            expected,
        });
    }
    Ok(())
}
