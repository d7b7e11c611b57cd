use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocksense_core::{FieldErrors, ItemId};

use crate::catalog::Catalog;
use crate::transaction::{TransactionKind, ValidatedTransaction};

/// Quantities at or below this count classify an item as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Derived stock classification.
///
/// Computed solely from the current quantity, recomputed after every
/// accepted mutation, never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InStock,
    LowStock,
    /// Part of the display vocabulary (see [`ItemStatus::badge_class`]) but
    /// never produced by [`ItemStatus::for_quantity`]: a quantity of zero
    /// still classifies as `LowStock` under the current rules.
    OutOfStock,
}

impl ItemStatus {
    /// The status-derivation rule, total over all quantities.
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity <= LOW_STOCK_THRESHOLD {
            ItemStatus::LowStock
        } else {
            ItemStatus::InStock
        }
    }

    /// CSS badge class the dashboard table renders the status with.
    pub fn badge_class(self) -> &'static str {
        match self {
            ItemStatus::InStock => "badge-secondary",
            ItemStatus::LowStock => "badge-warning",
            ItemStatus::OutOfStock => "badge-danger",
        }
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ItemStatus::InStock => "In Stock",
            ItemStatus::LowStock => "Low Stock",
            ItemStatus::OutOfStock => "Out of Stock",
        };
        f.write_str(label)
    }
}

/// Short date for the last-updated column, e.g. "Nov 15, 2023".
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Date with clock time for the header stamp, e.g. "Nov 15, 2023 2:05 PM".
pub fn date_time(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// A tracked stock item.
///
/// Invariants: `quantity` is never negative after any accepted
/// transaction, `status` is always the derivation of `quantity`, and
/// `last_updated` reflects the most recent accepted mutation (creation
/// time initially). State changes only through [`InventoryItem::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    sku: String,
    category: String,
    quantity: i64,
    location: String,
    status: ItemStatus,
    last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Build an item from a validated [`NewItem`] input, deriving the
    /// initial status from the starting quantity.
    pub fn new(id: ItemId, input: NewItem, created_at: DateTime<Utc>) -> Self {
        let status = ItemStatus::for_quantity(input.quantity);
        Self {
            id,
            name: input.name,
            sku: input.sku,
            category: input.category,
            quantity: input.quantity,
            location: input.location,
            status,
            last_updated: created_at,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Produce the item as it stands after `tx`.
    ///
    /// Precondition: `tx` was validated against this item's current
    /// quantity, which guarantees the resulting quantity is non-negative.
    /// The status is re-derived from the new quantity, the item moves to
    /// the transaction's location (a transaction can relocate the item
    /// while changing its quantity; one combined operation, not two), and
    /// `last_updated` becomes `now`.
    pub fn apply(&self, tx: &ValidatedTransaction, now: DateTime<Utc>) -> InventoryItem {
        debug_assert_eq!(self.id, tx.item_id());

        let new_quantity = match tx.kind() {
            TransactionKind::Add => self.quantity + tx.quantity(),
            TransactionKind::Remove => self.quantity - tx.quantity(),
        };
        debug_assert!(
            new_quantity >= 0,
            "transaction was validated against stale state"
        );

        InventoryItem {
            quantity: new_quantity,
            status: ItemStatus::for_quantity(new_quantity),
            location: tx.location().to_string(),
            last_updated: now,
            ..self.clone()
        }
    }
}

/// Input for the add-item flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub location: String,
}

impl NewItem {
    /// Check the input against the configured catalog.
    ///
    /// Every violated field is reported so a form can flag all invalid
    /// inputs at once. SKU uniqueness is checked by the store, which is
    /// the only place that can see the whole collection.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.set("name", "required");
        }
        if self.sku.trim().is_empty() {
            errors.set("sku", "required");
        }
        if self.category.trim().is_empty() {
            errors.set("category", "required");
        } else if !catalog.has_category(&self.category) {
            errors.set("category", format!("unknown category: {}", self.category));
        }
        if self.quantity <= 0 {
            errors.set("quantity", "must be greater than 0");
        }
        if self.location.trim().is_empty() {
            errors.set("location", "required");
        } else if !catalog.has_location(&self.location) {
            errors.set("location", format!("unknown location: {}", self.location));
        }

        errors.into_result(())
    }
}
