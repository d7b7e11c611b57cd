//! In-memory inventory store.
//!
//! Owns the canonical item collection and performs the one state
//! transition: apply a validated transaction to one item. This is the
//! layer a presentation shell talks to; the decision rules themselves live
//! in `stocksense-inventory`.

pub mod seed;
pub mod store;

pub use seed::seeded;
pub use store::{InventoryStore, StockSummary};
