//! Database module: models, schema, and the storage handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing and resetting the store
//! - `sqlite.rs`: the `InventoryStorage` handle and schema management
//! - `users.rs`: credential-store operations
//! - `catalog.rs`: category and item operations

pub mod catalog;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod users;

pub use models::{Category, CategorySort, Item};
pub use schema::{SEED_CATEGORIES, SQLITE_INIT};
pub use sqlite::{InventoryStorage, SqlitePool};
