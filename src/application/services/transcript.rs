//! # Allocation Transcript
//!
//! Human-readable rendering of an allocation result.
//!
//! One line per contract in allocation order naming the supplier, the
//! units taken, and the listing's original block price, followed by a
//! shortage notice when demand could not be met, followed by a summary
//! line with the total cost. The transcript is a presentation concern;
//! the structured [`AllocationResult`] is the contract callers must rely
//! on.
//!
//! # Examples
//!
//! ```
//! use charter_alloc::application::services::allocation::{
//!     AllocationEngine, AllocationRequest,
//! };
//! use charter_alloc::application::services::transcript::Transcript;
//! use charter_alloc::domain::entities::Listing;
//! use charter_alloc::domain::value_objects::{Money, Units};
//!
//! let listings = vec![
//!     Listing::new("Container renter B", Units::new(2.0).unwrap(), Money::new(1.0).unwrap()).unwrap(),
//! ];
//! let result = AllocationEngine::default()
//!     .allocate(&AllocationRequest::from_f64(2.0).unwrap(), &listings)
//!     .unwrap();
//!
//! let transcript = Transcript::from_result(&result);
//! assert_eq!(
//!     transcript.lines()[0],
//!     "[Contract with] Container renter B 2 container, price: 1"
//! );
//! ```

use crate::application::services::allocation::AllocationResult;
use std::fmt;

/// Notice emitted when demand exceeds the available capacity.
const SHORTAGE_NOTICE: &str = "Not enough containers";

/// Human-readable transcript of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Renders the transcript for an allocation result.
    #[must_use]
    pub fn from_result(result: &AllocationResult) -> Self {
        let mut lines = Vec::with_capacity(result.contracts.len() + 2);

        for contract in &result.contracts {
            lines.push(format!(
                "[Contract with] {} {} container, price: {}",
                contract.supplier(),
                contract.units_taken(),
                contract.block_price(),
            ));
        }

        if result.shortage {
            lines.push(SHORTAGE_NOTICE.to_string());
        }

        lines.push(format!("[Summary] total cost {}", result.total_cost));

        Self { lines }
    }

    /// Returns the transcript lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in &self.lines {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
            first = false;
        }
        Ok(())
    }
}
