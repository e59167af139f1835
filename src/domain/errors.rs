//! # Domain Errors
//!
//! Error types for the domain layer.
//!
//! These errors represent violations of the allocation domain's
//! preconditions: malformed listings, negative demand, and arithmetic
//! failures. Shortage is NOT an error — a demand that exceeds the
//! available capacity is a normal, reportable outcome carried in the
//! [`AllocationResult`](crate::application::services::allocation::AllocationResult).
//!
//! # Examples
//!
//! ```
//! use charter_alloc::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_listing("Container renter A", "capacity must be positive");
//! assert!(err.to_string().contains("Container renter A"));
//! ```

use crate::domain::value_objects::{ArithmeticError, Units};
use thiserror::Error;

/// Domain layer error.
///
/// Represents precondition failures surfaced synchronously to the caller.
/// No partial result accompanies any of these variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A quantity of capacity units failed validation.
    #[error("invalid units: {0}")]
    InvalidUnits(String),

    /// A monetary amount failed validation.
    #[error("invalid money amount: {0}")]
    InvalidMoney(String),

    /// A listing row is malformed (non-positive capacity).
    #[error("invalid listing from {supplier}: {reason}")]
    InvalidListing {
        /// Supplier label of the offending listing.
        supplier: String,
        /// Why the listing was rejected.
        reason: String,
    },

    /// The requested quantity is meaningless (negative or non-finite).
    #[error("invalid demand: {0}")]
    InvalidDemand(String),

    /// Internal post-condition violation: contracted units do not add up
    /// to the fillable quantity.
    #[error("allocation mismatch: allocated {allocated}, expected {expected}")]
    AllocationMismatch {
        /// Sum of units taken across all contracts.
        allocated: Units,
        /// The quantity that should have been contracted.
        expected: Units,
    },

    /// Checked arithmetic failure.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid-units error.
    #[must_use]
    pub fn invalid_units(message: impl Into<String>) -> Self {
        Self::InvalidUnits(message.into())
    }

    /// Creates an invalid-money error.
    #[must_use]
    pub fn invalid_money(message: impl Into<String>) -> Self {
        Self::InvalidMoney(message.into())
    }

    /// Creates an invalid-listing error.
    #[must_use]
    pub fn invalid_listing(supplier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidListing {
            supplier: supplier.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-demand error.
    #[must_use]
    pub fn invalid_demand(message: impl Into<String>) -> Self {
        Self::InvalidDemand(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(
            DomainError::invalid_units("must be non-negative").to_string(),
            "invalid units: must be non-negative"
        );
        assert_eq!(
            DomainError::invalid_listing("renter A", "capacity must be positive").to_string(),
            "invalid listing from renter A: capacity must be positive"
        );
        assert_eq!(
            DomainError::invalid_demand("negative quantity").to_string(),
            "invalid demand: negative quantity"
        );
    }

    #[test]
    fn arithmetic_error_converts() {
        let err: DomainError = ArithmeticError::DivisionByZero.into();
        assert_eq!(err.to_string(), "arithmetic error: division by zero");
    }

    #[test]
    fn allocation_mismatch_reports_both_sides() {
        let err = DomainError::AllocationMismatch {
            allocated: Units::zero(),
            expected: Units::new(3.0).unwrap(),
        };
        assert!(err.to_string().contains("allocated 0"));
        assert!(err.to_string().contains("expected 3"));
    }
}
