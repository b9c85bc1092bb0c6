use labkit_core::Dollars;

/// A named item and its current price.
///
/// Instances handed out by the store are snapshots; changing one does not
/// touch the store.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    name: String,
    price: Dollars,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, price: Dollars) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Dollars {
        self.price
    }
}

impl core::fmt::Display for InventoryItem {
    /// `"<name>: $<price>"`, the line format of the list endpoint.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}
