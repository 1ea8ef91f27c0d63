//! Inventory Core - Domain types and stock rules.
//!
//! This crate provides everything the front ends share:
//! - `server` - HTTP API over the product service
//! - `cli` - Command-line access to the same operations
//!
//! # Architecture
//!
//! The core crate holds the domain types, the [`ProductRepository`] contract
//! and the [`ProductService`] that enforces quantity rules. It has no database
//! or HTTP dependencies; the `PostgreSQL` repository lives in the server crate.
//! Enabling the `postgres` feature only adds `sqlx` type mappings.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `ProductName` and the `Product` entity
//! - [`error`] - Repository and service error types
//! - [`repository`] - Storage contract and an in-memory implementation
//! - [`service`] - Quantity validation and orchestration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod repository;
pub mod service;
pub mod types;

pub use error::{BoxError, InventoryError, RepositoryError};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use types::*;
