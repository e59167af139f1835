//! # Domain Entities
//!
//! Entities representing core business concepts.
//!
//! - [`Listing`]: a supplier's offer of a capacity block at a fixed price
//! - [`Contract`]: units taken from one listing and the price charged

pub mod contract;
pub mod listing;

pub use contract::Contract;
pub use listing::Listing;
