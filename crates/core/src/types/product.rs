//! The product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProductId, ProductName};

/// An inventory record.
///
/// `quantity` is never negative: the service refuses adjustments that would
/// take it below zero and the `product` table carries a matching `CHECK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned product ID.
    pub id: ProductId,
    /// Display name.
    pub name: ProductName,
    /// Units in stock.
    pub quantity: i32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the quantity was last changed.
    pub updated_at: DateTime<Utc>,
}
