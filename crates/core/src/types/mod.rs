//! Core types for Inventory.
//!
//! This module provides type-safe wrappers for the product domain.

pub mod id;
pub mod name;
pub mod product;

pub use id::ProductId;
pub use name::{ProductName, ProductNameError};
pub use product::Product;
