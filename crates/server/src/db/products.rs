//! Product repository backed by `PostgreSQL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use inventory_core::{Product, ProductId, ProductName, ProductRepository};

use super::RepositoryError;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `product` queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let name = ProductName::parse(&row.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid name for product {}: {e}", row.id))
        })?;

        if row.quantity < 0 {
            return Err(RepositoryError::DataCorruption(format!(
                "negative quantity {} for product {}",
                row.quantity, row.id
            )));
        }

        Ok(Self {
            id: ProductId::new(row.id),
            name,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn db_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::backend(err)
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
///
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn add(&self, name: &ProductName, quantity: i32) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO product (name, quantity)
            VALUES ($1, $2)
            RETURNING id, name, quantity, created_at, updated_at
            ",
        )
        .bind(name.as_str())
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row.try_into()
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, quantity, created_at, updated_at
            FROM product
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, quantity, created_at, updated_at
            FROM product
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn set_quantity(&self, id: ProductId, quantity: i32) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE product
            SET quantity = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, quantity, created_at, updated_at
            ",
        )
        .bind(id.as_i32())
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    /// Single-statement conditional update: the range check and the write
    /// happen under the same row lock.
    async fn adjust_quantity(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE product
            SET quantity = quantity + $2, updated_at = NOW()
            WHERE id = $1
              AND quantity::BIGINT + $2 BETWEEN 0 AND 2147483647
            RETURNING id, name, quantity, created_at, updated_at
            ",
        )
        .bind(id.as_i32())
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(db_error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(name: &str, quantity: i32) -> ProductRow {
        ProductRow {
            id: 7,
            name: name.to_string(),
            quantity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_into_product() {
        let product: Product = row("Widget", 3).try_into().unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name.as_str(), "Widget");
        assert_eq!(product.quantity, 3);
    }

    #[test]
    fn test_row_with_negative_quantity_is_corrupt() {
        let result: Result<Product, _> = row("Widget", -1).try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_row_with_blank_name_is_corrupt() {
        let result: Result<Product, _> = row("  ", 1).try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
