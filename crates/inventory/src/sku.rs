//! SKU suggestion helper for the add-item form.

use rand::Rng;

/// Build a SKU suggestion from the item's category and name.
///
/// Shape: two-letter category prefix, up to two name-word initials, and a
/// zero-padded random three-digit suffix, e.g. `EL-WK-042`. The suffix is
/// random, so the helper alone can collide with an existing SKU;
/// uniqueness against the live collection is the store's job
/// (`InventoryStore::suggest_sku`).
///
/// Returns `None` when either part is blank.
pub fn generate_sku(category: &str, name: &str, rng: &mut impl Rng) -> Option<String> {
    let category = category.trim();
    let name = name.trim();
    if category.is_empty() || name.is_empty() {
        return None;
    }

    let category_prefix: String = category.chars().take(2).collect::<String>().to_uppercase();
    let name_prefix: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    let suffix: u32 = rng.random_range(0..1000);

    Some(format!("{category_prefix}-{name_prefix}-{suffix:03}"))
}
