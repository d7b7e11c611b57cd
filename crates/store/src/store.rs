use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use stocksense_core::{InventoryError, InventoryResult, ItemId};
use stocksense_inventory::{
    generate_sku, transaction, Catalog, InventoryItem, ItemStatus, NewItem, TransactionRequest,
    ValidatedTransaction,
};

/// Retries before `suggest_sku` gives up on finding an unused suffix.
const MAX_SKU_ATTEMPTS: usize = 32;

/// Aggregated dashboard counts computed from the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub total_items: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub total_units: i64,
}

/// Owner of the canonical item collection.
///
/// Single-writer by construction: every mutation goes through `&mut self`
/// and validates + applies atomically within one call, so the "quantity
/// never negative" invariant cannot be broken through this API. A
/// multi-writer deployment would need to re-validate (or compare-and-swap
/// on the expected quantity) at the write boundary; this store does not
/// attempt that.
///
/// Items are held behind `Arc`, so snapshots are cheap and an untouched
/// item keeps its allocation across transactions, letting a rendering
/// layer change-detect by pointer identity.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    catalog: Catalog,
    items: Vec<Arc<InventoryItem>>,
}

impl InventoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            items: Vec::new(),
        }
    }

    /// Build a store over an existing collection, preserving its order.
    pub fn with_items(catalog: Catalog, items: impl IntoIterator<Item = InventoryItem>) -> Self {
        Self {
            catalog,
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the collection, in stable insertion order.
    pub fn items(&self) -> &[Arc<InventoryItem>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Arc<InventoryItem>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Case-insensitive name/SKU substring search. A blank query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<Arc<InventoryItem>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| {
                item.name().to_lowercase().contains(&needle)
                    || item.sku().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn in_category(&self, category: &str) -> Vec<Arc<InventoryItem>> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary {
            total_items: self.items.len(),
            in_stock: self
                .items
                .iter()
                .filter(|item| item.status() == ItemStatus::InStock)
                .count(),
            low_stock: self
                .items
                .iter()
                .filter(|item| item.status() == ItemStatus::LowStock)
                .count(),
            total_units: self.items.iter().map(|item| item.quantity()).sum(),
        }
    }

    /// The single entry point for the add/remove stock flow: look up the
    /// item, validate the request against its current state, then apply.
    pub fn submit_transaction(
        &mut self,
        request: TransactionRequest,
        now: DateTime<Utc>,
    ) -> InventoryResult<Arc<InventoryItem>> {
        let item = self
            .get(request.item_id)
            .ok_or(InventoryError::ItemNotFound)?
            .clone();
        let tx = transaction::validate(&item, request)?;
        self.apply_transaction(&tx, now)
    }

    /// Apply an already-validated transaction to its target item.
    ///
    /// Replaces only the targeted entry; every other entry keeps its `Arc`
    /// identity. The validated request must have been checked against the
    /// item's current quantity, which [`InventoryStore::submit_transaction`]
    /// guarantees by validating and applying in one call.
    pub fn apply_transaction(
        &mut self,
        tx: &ValidatedTransaction,
        now: DateTime<Utc>,
    ) -> InventoryResult<Arc<InventoryItem>> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == tx.item_id())
            .ok_or(InventoryError::ItemNotFound)?;

        let updated = Arc::new(self.items[index].apply(tx, now));
        self.items[index] = Arc::clone(&updated);

        tracing::info!(
            item_id = %updated.id(),
            sku = updated.sku(),
            kind = ?tx.kind(),
            quantity = tx.quantity(),
            new_quantity = updated.quantity(),
            status = %updated.status(),
            location = updated.location(),
            "transaction applied"
        );

        Ok(updated)
    }

    /// Entry point for the add-item flow.
    ///
    /// Validates the input against the catalog, rejects a SKU already in
    /// use, derives the initial status from the starting quantity, and
    /// appends the item to the collection.
    pub fn create_item(
        &mut self,
        input: NewItem,
        now: DateTime<Utc>,
    ) -> InventoryResult<Arc<InventoryItem>> {
        let mut errors = input.validate(&self.catalog).err().unwrap_or_default();
        if !input.sku.trim().is_empty() && self.sku_in_use(&input.sku) {
            errors.set("sku", "already in use");
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let item = Arc::new(InventoryItem::new(ItemId::new(), input, now));
        self.items.push(Arc::clone(&item));

        tracing::info!(
            item_id = %item.id(),
            sku = item.sku(),
            quantity = item.quantity(),
            status = %item.status(),
            location = item.location(),
            "item created"
        );

        Ok(item)
    }

    /// Suggest a SKU that is not already in use.
    ///
    /// The random suffix can collide with an existing SKU, so retry a
    /// bounded number of times before giving up. `None` also covers blank
    /// category/name inputs.
    pub fn suggest_sku(&self, category: &str, name: &str, rng: &mut impl Rng) -> Option<String> {
        for _ in 0..MAX_SKU_ATTEMPTS {
            let candidate = generate_sku(category, name, rng)?;
            if !self.sku_in_use(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn sku_in_use(&self, sku: &str) -> bool {
        self.items.iter().any(|item| item.sku() == sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stocksense_inventory::TransactionKind;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_store() -> InventoryStore {
        crate::seed::seeded(test_time())
    }

    fn new_item(sku: &str) -> NewItem {
        NewItem {
            name: "USB Hub".to_string(),
            sku: sku.to_string(),
            category: "Electronics".to_string(),
            quantity: 30,
            location: "Warehouse C".to_string(),
        }
    }

    fn request(item: &InventoryItem, kind: TransactionKind, quantity: i64) -> TransactionRequest {
        TransactionRequest {
            item_id: item.id(),
            kind,
            quantity,
            location: item.location().to_string(),
            notes: None,
        }
    }

    #[test]
    fn create_item_appends_in_order() {
        let mut store = test_store();
        let before = store.len();

        let item = store.create_item(new_item("EL-UH-901"), test_time()).unwrap();

        assert_eq!(store.len(), before + 1);
        assert!(Arc::ptr_eq(store.items().last().unwrap(), &item));
        assert_eq!(item.status(), ItemStatus::InStock);
    }

    #[test]
    fn create_item_rejects_duplicate_sku() {
        let mut store = test_store();
        let err = store
            .create_item(new_item("KB-WL-001"), test_time())
            .unwrap_err();

        let errors = err.field_errors().expect("validation error");
        assert_eq!(errors.get("sku"), Some("already in use"));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn create_item_merges_catalog_and_sku_errors() {
        let mut store = test_store();
        let mut input = new_item("KB-WL-001");
        input.quantity = 0;

        let err = store.create_item(input, test_time()).unwrap_err();
        let errors = err.field_errors().expect("validation error");

        assert_eq!(errors.get("sku"), Some("already in use"));
        assert_eq!(errors.get("quantity"), Some("must be greater than 0"));
    }

    #[test]
    fn submit_transaction_rejects_unknown_item() {
        let mut store = test_store();
        let req = TransactionRequest {
            item_id: ItemId::new(),
            kind: TransactionKind::Add,
            quantity: 1,
            location: "Warehouse A".to_string(),
            notes: None,
        };

        assert_eq!(
            store.submit_transaction(req, test_time()).unwrap_err(),
            InventoryError::ItemNotFound
        );
    }

    #[test]
    fn failed_validation_leaves_the_item_untouched() {
        let mut store = test_store();
        let chair = store.search("FN-CH-102")[0].clone();
        assert_eq!(chair.quantity(), 8);

        let err = store
            .submit_transaction(request(&chair, TransactionKind::Remove, 10), test_time())
            .unwrap_err();

        let errors = err.field_errors().expect("validation error");
        assert_eq!(
            errors.get("quantity"),
            Some("cannot remove more than available quantity (8)")
        );
        assert!(Arc::ptr_eq(store.get(chair.id()).unwrap(), &chair));
    }

    #[test]
    fn summary_counts_the_seeded_collection() {
        let summary = test_store().summary();
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.in_stock, 3);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.total_units, 24 + 8 + 15 + 5 + 12);
    }

    #[test]
    fn search_matches_name_and_sku_case_insensitively() {
        let store = test_store();
        assert_eq!(store.search("wireless").len(), 2);
        assert_eq!(store.search("fn-ch").len(), 1);
        assert_eq!(store.search("").len(), 5);
        assert!(store.search("widget").is_empty());
    }

    #[test]
    fn in_category_filters_the_snapshot() {
        let store = test_store();
        assert_eq!(store.in_category("Electronics").len(), 3);
        assert_eq!(store.in_category("Furniture").len(), 1);
        assert!(store.in_category("Clothing").is_empty());
    }

    #[test]
    fn suggest_sku_avoids_existing_skus() {
        let store = test_store();
        let mut rng = StdRng::seed_from_u64(3);

        let sku = store
            .suggest_sku("Electronics", "Wireless Keyboard", &mut rng)
            .unwrap();

        assert!(sku.starts_with("EL-WK-"));
        assert!(!store.sku_in_use(&sku));
    }

    #[test]
    fn suggest_sku_requires_both_parts() {
        let store = test_store();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(store.suggest_sku("", "Desk", &mut rng), None);
    }
}
