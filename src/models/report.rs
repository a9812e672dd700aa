//! Gap report produced by a check

use serde::{Deserialize, Serialize};

use super::date_key::DateKey;

/// Summary of expected vs. held document dates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GapReport {
    /// Number of dates a document is expected for
    pub total: usize,
    /// Expected dates that are held
    pub held_count: usize,
    /// Expected dates that are not held, in chronological order
    pub missing: Vec<DateKey>,
}

impl GapReport {
    /// Number of missing dates
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// True when every expected date is held
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
