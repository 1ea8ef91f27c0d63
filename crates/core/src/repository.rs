//! Product repository contract and in-memory implementation.
//!
//! The repository is a thin translation between [`Product`] and its storage
//! row. It performs no business validation; that lives in
//! [`ProductService`](crate::ProductService).

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::RepositoryError;
use crate::types::{Product, ProductId, ProductName};

/// Storage operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its generated ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the insert fails.
    async fn add(&self, name: &ProductName, quantity: i32) -> Result<Product, RepositoryError>;

    /// List every product, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row is invalid.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row is invalid.
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Overwrite the stored quantity and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Backend` if the update fails.
    async fn set_quantity(&self, id: ProductId, quantity: i32) -> Result<Product, RepositoryError>;

    /// Add `delta` to the stored quantity if the result stays within
    /// `0..=i32::MAX`.
    ///
    /// Returns `Ok(None)` when the product does not exist or the new quantity
    /// would fall outside that range; the stored quantity is then unchanged.
    ///
    /// The default implementation reads then writes and is only safe when
    /// callers are serialized. Stores that can express a conditional update
    /// should override it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store fails.
    async fn adjust_quantity(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        let Some(current) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        match current.quantity.checked_add(delta) {
            Some(quantity) if quantity >= 0 => match self.set_quantity(id, quantity).await {
                Ok(product) => Ok(Some(product)),
                Err(RepositoryError::NotFound) => Ok(None),
                Err(e) => Err(e),
            },
            _ => Ok(None),
        }
    }

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store does not answer.
    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// A process-local repository backed by a `BTreeMap`.
///
/// IDs are assigned sequentially from 1. All access goes through one mutex,
/// so `adjust_quantity` is atomic. Used by the test suites.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    products: BTreeMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock cannot leave a half-written product.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, name: &ProductName, quantity: i32) -> Result<Product, RepositoryError> {
        let mut state = self.lock();

        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::backend("product id sequence exhausted"))?;
        state.last_id = next;

        let now = Utc::now();
        let product = Product {
            id: ProductId::new(next),
            name: name.clone(),
            quantity,
            created_at: now,
            updated_at: now,
        };
        state.products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.lock().products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.lock().products.get(&id).cloned())
    }

    async fn set_quantity(&self, id: ProductId, quantity: i32) -> Result<Product, RepositoryError> {
        let mut state = self.lock();
        let product = state
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;

        product.quantity = quantity;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn adjust_quantity(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut state = self.lock();
        let Some(product) = state.products.get_mut(&id) else {
            return Ok(None);
        };

        match product.quantity.checked_add(delta) {
            Some(quantity) if quantity >= 0 => {
                product.quantity = quantity;
                product.updated_at = Utc::now();
                Ok(Some(product.clone()))
            }
            _ => Ok(None),
        }
    }
}
