//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ListingId`]: UUID-based listing identifier
//! - [`SupplierName`]: opaque supplier label (reporting only)
//!
//! ## Numeric Types
//!
//! - [`Units`]: Decimal capacity quantity with checked arithmetic
//! - [`Money`]: Decimal monetary amount with checked arithmetic
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations

pub mod arithmetic;
pub mod ids;
pub mod money;
pub mod units;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use ids::{ListingId, SupplierName};
pub use money::Money;
pub use units::Units;
