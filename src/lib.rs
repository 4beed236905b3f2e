pub mod auth;
pub mod config;
pub mod db;
pub mod error;

pub use db::{Category, CategorySort, InventoryStorage, Item};
pub use error::StoreError;
