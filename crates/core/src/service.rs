//! Stock service enforcing the quantity rules.
//!
//! Two rules apply to every adjustment:
//!
//! - the amount must be strictly positive
//! - the resulting quantity must never drop below zero
//!
//! Adjustments go through [`ProductRepository::adjust_quantity`], so a store
//! with a conditional update applies the check and the write as one step.

use tracing::{debug, info};

use crate::error::InventoryError;
use crate::repository::ProductRepository;
use crate::types::{Product, ProductId, ProductName};

/// Orchestrates product operations on top of a [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repository: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a service over the given repository.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Get a reference to the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidArgument` if the name is blank or too
    /// long, or if `quantity` is negative.
    /// Returns `InventoryError::Repository` if the insert fails.
    pub async fn add_product(&self, name: &str, quantity: i32) -> Result<Product, InventoryError> {
        let name = ProductName::parse(name)?;
        if quantity < 0 {
            return Err(InventoryError::InvalidArgument(format!(
                "quantity must not be negative (got {quantity})"
            )));
        }

        let product = self.repository.add(&name, quantity).await?;
        info!(product_id = %product.id, name = %product.name, quantity, "Product created");

        Ok(product)
    }

    /// List every product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Repository` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.repository.list_all().await?)
    }

    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if no product has this ID.
    /// Returns `InventoryError::Repository` if the query fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Add `amount` units to a product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidArgument` if `amount <= 0` (checked
    /// before the product is looked up) or if the sum overflows.
    /// Returns `InventoryError::NotFound` if no product has this ID.
    /// Returns `InventoryError::Repository` if the store fails.
    pub async fn increment_quantity(
        &self,
        id: ProductId,
        amount: i32,
    ) -> Result<Product, InventoryError> {
        ensure_positive(amount)?;

        if let Some(product) = self.repository.adjust_quantity(id, amount).await? {
            info!(product_id = %id, amount, quantity = product.quantity, "Quantity incremented");
            return Ok(product);
        }

        let current = self.get_product(id).await?;
        Err(InventoryError::InvalidArgument(format!(
            "adding {amount} to quantity {} would overflow",
            current.quantity
        )))
    }

    /// Remove `amount` units from a product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidArgument` if `amount <= 0`.
    /// Returns `InventoryError::NotFound` if no product has this ID.
    /// Returns `InventoryError::InsufficientStock` if fewer than `amount`
    /// units are in stock; the quantity is left unchanged.
    /// Returns `InventoryError::Repository` if the store fails.
    pub async fn decrement_quantity(
        &self,
        id: ProductId,
        amount: i32,
    ) -> Result<Product, InventoryError> {
        ensure_positive(amount)?;

        if let Some(product) = self.repository.adjust_quantity(id, -amount).await? {
            info!(product_id = %id, amount, quantity = product.quantity, "Quantity decremented");
            return Ok(product);
        }

        let current = self.get_product(id).await?;
        debug!(
            product_id = %id,
            requested = amount,
            available = current.quantity,
            "Decrement refused"
        );
        Err(InventoryError::InsufficientStock {
            id,
            requested: amount,
            available: current.quantity,
        })
    }
}

fn ensure_positive(amount: i32) -> Result<(), InventoryError> {
    if amount <= 0 {
        return Err(InventoryError::InvalidArgument(format!(
            "amount must be greater than zero (got {amount})"
        )));
    }
    Ok(())
}
