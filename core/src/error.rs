//! Domain error taxonomy.
//!
//! These are the validation and domain failures every layer agrees on. They
//! are recovered at the operation boundary and returned as structured results
//! — never left as unhandled faults crossing into the tool-dispatch or HTTP
//! boundary. Infrastructure failures are a separate concern and live in the
//! store crate's error type.

use thiserror::Error;

/// Validation and domain errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Referenced customer does not exist
    #[error("customer {0} not found")]
    CustomerNotFound(i64),

    /// Referenced book does not exist
    #[error("book with ISBN {isbn} not found")]
    BookNotFound {
        /// The unknown ISBN
        isbn: String,
    },

    /// Referenced order does not exist
    #[error("order {0} not found")]
    OrderNotFound(i64),

    /// Caller-supplied value failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Requested quantity exceeds the book's current stock
    #[error("not enough stock for {isbn}: {available} available, {requested} requested")]
    InsufficientStock {
        /// ISBN of the short book
        isbn: String,
        /// Copies currently in stock
        available: i64,
        /// Copies requested
        requested: i64,
    },
}

impl DomainError {
    /// Shorthand for a missing book
    #[must_use]
    pub fn book_not_found(isbn: impl Into<String>) -> Self {
        Self::BookNotFound { isbn: isbn.into() }
    }
}
