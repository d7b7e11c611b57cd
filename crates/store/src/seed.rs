//! Demo inventory the dashboard ships with.

use chrono::{DateTime, Utc};

use stocksense_core::ItemId;
use stocksense_inventory::{Catalog, InventoryItem, NewItem};

use crate::store::InventoryStore;

/// The demo stock rows.
fn seed_rows() -> Vec<NewItem> {
    [
        ("Wireless Keyboard", "KB-WL-001", "Electronics", 24, "Warehouse A"),
        ("Office Chair", "FN-CH-102", "Furniture", 8, "Warehouse B"),
        ("Laptop Stand", "AC-LS-034", "Office Supplies", 15, "Warehouse A"),
        ("Wireless Mouse", "KB-WM-022", "Electronics", 5, "Warehouse C"),
        ("Monitor 24\"", "EL-MN-056", "Electronics", 12, "Warehouse A"),
    ]
    .into_iter()
    .map(|(name, sku, category, quantity, location)| NewItem {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        quantity,
        location: location.to_string(),
    })
    .collect()
}

/// A store over the standard catalog, pre-populated with the demo items.
///
/// Statuses derive from the seeded quantities; `created_at` stamps every
/// row's `last_updated`.
pub fn seeded(created_at: DateTime<Utc>) -> InventoryStore {
    let items = seed_rows()
        .into_iter()
        .map(|input| InventoryItem::new(ItemId::new(), input, created_at));
    InventoryStore::with_items(Catalog::standard(), items)
}
