//! Error types for the repository and service layers.

use thiserror::Error;

use crate::types::{ProductId, ProductNameError};

/// Boxed error from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed (connection, query, constraint).
    #[error("database error: {0}")]
    Backend(#[source] BoxError),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

impl RepositoryError {
    /// Wrap a backend error.
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }
}

/// Errors returned by [`ProductService`](crate::ProductService).
///
/// The first three variants are business rule violations and are safe to
/// show to callers; `Repository` is an infrastructure failure.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An argument failed validation (non-positive amount, blank name, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No product exists with the given ID.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A decrement would take the quantity below zero.
    #[error(
        "insufficient stock for product {id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        /// Product being decremented.
        id: ProductId,
        /// Amount the caller asked to remove.
        requested: i32,
        /// Quantity currently in stock.
        available: i32,
    },

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl InventoryError {
    /// Returns `true` for errors caused by the caller's input rather than
    /// by the storage layer.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}

impl From<ProductNameError> for InventoryError {
    fn from(err: ProductNameError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_display() {
        let err = InventoryError::NotFound(ProductId::new(12));
        assert_eq!(err.to_string(), "product 12 not found");

        let err = InventoryError::InsufficientStock {
            id: ProductId::new(3),
            requested: 20,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for product 3: requested 20, available 8"
        );

        let err = InventoryError::InvalidArgument("amount must be positive".to_string());
        assert_eq!(err.to_string(), "invalid argument: amount must be positive");
    }

    #[test]
    fn test_repository_error_is_not_client_error() {
        let err = InventoryError::from(RepositoryError::DataCorruption("bad row".to_string()));
        assert!(!err.is_client_error());
        assert!(InventoryError::NotFound(ProductId::new(1)).is_client_error());
    }

    #[test]
    fn test_backend_error_keeps_source() {
        let io = std::io::Error::other("connection reset");
        let err = RepositoryError::backend(io);
        assert_eq!(err.to_string(), "database error: connection reset");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_name_error_becomes_invalid_argument() {
        let err = InventoryError::from(ProductNameError::Empty);
        assert!(matches!(err, InventoryError::InvalidArgument(_)));
    }
}
