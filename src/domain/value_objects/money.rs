//! # Money
//!
//! Non-negative monetary amount with checked arithmetic.
//!
//! A [`Money`] value carries a listing's block price, a derived unit
//! price, or an accumulated allocation cost. Like
//! [`Units`](crate::domain::value_objects::Units) it wraps
//! [`rust_decimal::Decimal`] for exact, deterministic arithmetic.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::domain::value_objects::Money;
//!
//! let block_price = Money::new(3.0).unwrap();
//! let free = Money::zero();
//! assert!(free < block_price);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// Zero is a legal amount: a listing offering free capacity has a block
/// price of zero and a unit price of zero.
///
/// # Invariants
///
/// - The wrapped value is finite and `>= 0` when constructed through
///   [`Money::new`] or [`Money::from_decimal`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates an amount from a float, validating it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoney` if the value is negative or
    /// not finite.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_money("amount must be finite"));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_money("amount must be non-negative"));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::invalid_money("amount is not representable"))?;
        Ok(Self(decimal))
    }

    /// Creates an amount from an exact decimal, validating it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoney` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_money("amount must be non-negative"));
        }
        Ok(Self(value))
    }

    /// The zero amount.
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

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Safely add two amounts.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_add(rhs.0)?))
    }

    /// Safely multiply the amount by a scalar factor.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    pub fn safe_mul(self, factor: Decimal) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_mul(factor)?))
    }

    /// Safely divide the amount by a scalar divisor.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    pub fn safe_div(self, divisor: Decimal) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_div(divisor)?))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_accepts_positive() {
            let amount = Money::new(3.0).unwrap();
            assert_eq!(amount.get(), Decimal::new(3, 0));
        }

        #[test]
        fn new_accepts_zero() {
            assert!(Money::new(0.0).unwrap().is_zero());
        }

        #[test]
        fn new_rejects_negative() {
            assert!(matches!(
                Money::new(-0.5),
                Err(DomainError::InvalidMoney(_))
            ));
        }

        #[test]
        fn new_rejects_non_finite() {
            assert!(matches!(
                Money::new(f64::NAN),
                Err(DomainError::InvalidMoney(_))
            ));
        }
    }

    mod operations {
        use super::*;

        #[test]
        fn safe_add_accumulates() {
            let a = Money::new(1.0).unwrap();
            let b = Money::new(0.5).unwrap();
            assert_eq!(a.safe_add(b).unwrap(), Money::new(1.5).unwrap());
        }

        #[test]
        fn safe_mul_scales() {
            let unit_price = Money::new(0.5).unwrap();
            let charged = unit_price.safe_mul(Decimal::new(2, 0)).unwrap();
            assert_eq!(charged, Money::new(1.0).unwrap());
        }

        #[test]
        fn safe_div_by_zero_fails() {
            let amount = Money::new(1.0).unwrap();
            assert!(amount.safe_div(Decimal::ZERO).is_err());
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let amount = Money::new(2.5).unwrap();
            let json = serde_json::to_string(&amount).unwrap();
            let deserialized: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(amount, deserialized);
        }
    }
}
