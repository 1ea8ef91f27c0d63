//! Application state shared across handlers.

use std::sync::Arc;

use inventory_core::{ProductRepository, ProductService};

/// Application state shared across all handlers.
///
/// Generic over the repository so the same router serves `PostgreSQL` in
/// production and the in-memory store in tests. Cloning is an `Arc` bump.
pub struct AppState<R> {
    inner: Arc<AppStateInner<R>>,
}

struct AppStateInner<R> {
    service: ProductService<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: ProductRepository> AppState<R> {
    /// Create application state around a repository.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service: ProductService::new(repository),
            }),
        }
    }

    /// Get a reference to the product service.
    #[must_use]
    pub fn service(&self) -> &ProductService<R> {
        &self.inner.service
    }
}
