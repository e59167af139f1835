//! # Units
//!
//! Non-negative quantity of capacity units with checked arithmetic.
//!
//! A [`Units`] value measures the resource being allocated (e.g., a
//! number of containers). It wraps [`rust_decimal::Decimal`] so ordering
//! keys and partial-fill quantities are exact, with no float comparison
//! hazards.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::domain::value_objects::Units;
//!
//! let needed = Units::new(3.0).unwrap();
//! let offered = Units::new(2.0).unwrap();
//! assert_eq!(needed.min(offered), offered);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative quantity of capacity units.
///
/// # Invariants
///
/// - The wrapped value is finite and `>= 0` when constructed through
///   [`Units::new`] or [`Units::from_decimal`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Units(Decimal);

impl Units {
    /// Creates a quantity from a float, validating it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnits` if the value is negative or
    /// not finite.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_units("value must be finite"));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_units("value must be non-negative"));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::invalid_units("value is not representable"))?;
        Ok(Self(decimal))
    }

    /// Creates a quantity from an exact decimal, validating it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnits` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_units("value must be non-negative"));
        }
        Ok(Self(value))
    }

    /// The zero quantity.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the quantity is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the quantity is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns the smaller of two quantities.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Safely add two quantities.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_add(rhs.0)?))
    }

    /// Safely subtract two quantities.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    pub fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_sub(rhs.0)?))
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
