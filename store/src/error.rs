//! Store error type.

use bookdesk_core::DomainError;
use thiserror::Error;

/// Errors surfaced by store operations.
///
/// Domain failures keep their full [`DomainError`] shape so callers can map
/// them to structured results; infrastructure failures are wrapped so the
/// tool and HTTP layers can surface a generic message while the detail goes
/// to the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation or domain failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Underlying database operation failed
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// The domain failure inside this error, if it is one
    #[must_use]
    pub const fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Database(_) => None,
        }
    }
}
