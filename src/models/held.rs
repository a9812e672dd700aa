//! The set of dates a user already holds documents for
//!
//! Built from free text: tokens are separated by any whitespace and kept
//! verbatim. No format validation happens here, so a stray token simply never
//! matches a generated key.

use std::collections::BTreeSet;

use super::date_key::DateKey;

/// Set of held date tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldDateSet {
    tokens: BTreeSet<String>,
}

impl HeldDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated tokens; duplicates collapse
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Whether a generated key is held
    pub fn contains(&self, key: &DateKey) -> bool {
        self.tokens.contains(key.as_str())
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
