use serde::{Deserialize, Serialize};

/// The enumerated category and location sets the core validates against.
///
/// Supplied by the embedding application at configuration time; the core
/// does not own or hardcode them. Order is preserved so selection lists
/// render in the configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<String>,
    locations: Vec<String>,
}

impl Catalog {
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        locations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    /// The demo configuration the dashboard ships with.
    pub fn standard() -> Self {
        Self::new(
            ["Electronics", "Furniture", "Office Supplies", "Clothing"],
            ["Warehouse A", "Warehouse B", "Warehouse C", "Store Front"],
        )
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }
}
