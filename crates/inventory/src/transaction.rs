use serde::{Deserialize, Serialize};

use stocksense_core::{FieldErrors, ItemId};

use crate::item::InventoryItem;

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Add,
    Remove,
}

/// A single proposed adjustment to one item's quantity, possibly also
/// relocating it.
///
/// Ephemeral: nothing of the request is retained once it has been applied
/// (there is no audit trail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub item_id: ItemId,
    pub kind: TransactionKind,
    pub quantity: i64,
    pub location: String,
    /// Free text from the form; not validated, stored nowhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Proof that a [`TransactionRequest`] passed [`validate`] against the
/// targeted item. Only this type can be fed to the store's apply step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransaction {
    request: TransactionRequest,
}

impl ValidatedTransaction {
    pub fn item_id(&self) -> ItemId {
        self.request.item_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.request.kind
    }

    pub fn quantity(&self) -> i64 {
        self.request.quantity
    }

    pub fn location(&self) -> &str {
        &self.request.location
    }

    pub fn notes(&self) -> Option<&str> {
        self.request.notes.as_deref()
    }

    /// The request, unchanged from what the caller supplied.
    pub fn into_inner(self) -> TransactionRequest {
        self.request
    }
}

/// Decide whether `request` may be applied to `item`, without mutating
/// anything.
///
/// Pure: the same inputs always produce the same result. Every violated
/// rule is reported, so the caller can flag all invalid fields at once.
/// The insufficient-stock message interpolates the quantity available at
/// validation time. Caller contract: `item` is the item that
/// `request.item_id` targets.
pub fn validate(
    item: &InventoryItem,
    request: TransactionRequest,
) -> Result<ValidatedTransaction, FieldErrors> {
    debug_assert_eq!(item.id(), request.item_id);

    let mut errors = FieldErrors::new();

    if request.quantity <= 0 {
        errors.set("quantity", "must be greater than 0");
    }
    if request.kind == TransactionKind::Remove && request.quantity > item.quantity() {
        errors.set(
            "quantity",
            format!(
                "cannot remove more than available quantity ({})",
                item.quantity()
            ),
        );
    }
    if request.location.trim().is_empty() {
        errors.set("location", "required");
    }

    errors.into_result(ValidatedTransaction { request })
}

/// Coerce raw form input to a quantity the way the dashboard's numeric
/// field does: an optional sign and leading digits parse, anything else
/// becomes 0, which the positive-quantity rule then rejects.
pub fn quantity_from_input(raw: &str) -> i64 {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    leading.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
