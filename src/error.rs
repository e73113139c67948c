//! Custom error types for salesdash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for salesdash operations
#[derive(Error, Debug)]
pub enum SalesError {
    /// Period selector could not be parsed or is out of range
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record references an entity missing from the reference tables
    #[error("Inconsistent reference: {entity} {identifier}")]
    InconsistentReference {
        entity: &'static str,
        identifier: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SalesError {
    /// Create a "not found" error for dealers
    pub fn dealer_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Dealer",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for customers
    pub fn customer_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-period error
    pub fn is_invalid_period(&self) -> bool {
        matches!(self, Self::InvalidPeriod(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SalesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SalesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for salesdash operations
pub type SalesResult<T> = Result<T, SalesError>;
