//! Inventory domain module.
//!
//! This crate contains the business rules for the stock dashboard,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): the item model with its derived status, transaction
//! validation, item-creation validation, and the catalog configuration
//! those checks run against.

pub mod catalog;
pub mod item;
pub mod sku;
pub mod transaction;

pub use catalog::Catalog;
pub use item::{
    date_time, short_date, InventoryItem, ItemStatus, NewItem, LOW_STOCK_THRESHOLD,
};
pub use sku::generate_sku;
pub use transaction::{
    quantity_from_input, validate, TransactionKind, TransactionRequest, ValidatedTransaction,
};
