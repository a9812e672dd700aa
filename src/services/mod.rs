//! Service layer for DocHunt
//!
//! Pure date range generation and gap analysis, plus the check service that
//! strings them together for one user action.

pub mod analyzer;
pub mod check;
pub mod generator;

pub use analyzer::analyze;
pub use check::{CheckOutcome, CheckRequest, CheckService};
pub use generator::{DateRangeGenerator, DEFAULT_YEAR};
