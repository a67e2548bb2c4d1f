use thiserror::Error;

use super::types::InvoiceStatus;

/// Errors that can occur while building, transitioning or persisting invoices.
///
/// The calculators themselves never fail; every arithmetic edge case has a
/// defined result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillbookError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Status change not permitted by the invoice lifecycle.
    #[error("cannot move invoice from {from} to {to}")]
    InvalidTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },

    /// A record referenced by id or number does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage backend I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored collection could not be (de)serialized.
    #[cfg(feature = "store")]
    #[error("failed to (de)serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join validation errors into the message carried by [`BillbookError::Validation`].
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
