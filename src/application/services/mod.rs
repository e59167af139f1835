//! # Application Services
//!
//! Services that orchestrate the allocation domain.
//!
//! This module provides the three phases of an allocation run:
//! - [`ordering`]: cheapest-first listing ordering
//! - [`allocation`]: the greedy partial-fill [`AllocationEngine`]
//! - [`transcript`]: human-readable outcome reporting

pub mod allocation;
pub mod ordering;
pub mod transcript;

pub use allocation::{
    AllocationEngine, AllocationRequest, AllocationResult, AllocatorConfig, InvalidListingPolicy,
};
pub use ordering::{OrderedListing, order_by_unit_price};
pub use transcript::Transcript;
