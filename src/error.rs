//! Custom error types for DocHunt
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for DocHunt operations
#[derive(Error, Debug)]
pub enum DocHuntError {
    /// A date field is not a usable MMDD value
    #[error("{0}")]
    Format(String),

    /// Validation errors for user-supplied values other than dates
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DocHuntError {
    /// Create a format error for a field that is not exactly four digits
    pub fn bad_mmdd(input: &str) -> Self {
        Self::Format(format!(
            "expected MMDD format (e.g. 0818), got '{}'",
            input
        ))
    }

    /// Create a format error for a well-formed key that is not a real day
    pub fn no_such_day(key: &str, year: i32) -> Self {
        Self::Format(format!("{} is not a valid date in {}", key, year))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DocHuntError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for DocHunt operations
pub type DocHuntResult<T> = Result<T, DocHuntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocHuntError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_mmdd_error() {
        let err = DocHuntError::bad_mmdd("abc1");
        assert_eq!(
            err.to_string(),
            "expected MMDD format (e.g. 0818), got 'abc1'"
        );
        assert!(err.is_format());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_no_such_day_error() {
        let err = DocHuntError::no_such_day("0230", 2025);
        assert_eq!(err.to_string(), "0230 is not a valid date in 2025");
        assert!(err.is_format());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DocHuntError = io_err.into();
        assert!(matches!(err, DocHuntError::Io(_)));
    }
}
