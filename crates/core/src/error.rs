//! Lending error model.

use thiserror::Error;

/// Result type used across the lending crates.
pub type LendingResult<T> = Result<T, LendingError>;

/// Lending-level error.
///
/// Every variant is terminal for the attempted operation: nothing is retried and
/// no state is left half-mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LendingError {
    /// No item with this name is currently available in the store.
    #[error("item `{0}` cannot be borrowed")]
    NotAvailable(String),

    /// No item with this name was ever added to the store.
    #[error("item `{0}` does not belong to this store")]
    NotInStore(String),

    /// The library holds no outstanding record for this item name.
    #[error("item `{0}` was not borrowed from this library")]
    NotOutstanding(String),

    /// A reader tried to return something while holding nothing.
    #[error("reader `{0}` has nothing to return")]
    NothingToReturn(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl LendingError {
    pub fn not_available(name: impl Into<String>) -> Self {
        Self::NotAvailable(name.into())
    }

    pub fn not_in_store(name: impl Into<String>) -> Self {
        Self::NotInStore(name.into())
    }

    pub fn not_outstanding(name: impl Into<String>) -> Self {
        Self::NotOutstanding(name.into())
    }

    pub fn nothing_to_return(reader: impl Into<String>) -> Self {
        Self::NothingToReturn(reader.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
