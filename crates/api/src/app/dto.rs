//! Query-string DTOs and plain-text response bodies.

use serde::Deserialize;

use labkit_core::Dollars;
use labkit_inventory::InventoryItem;

/// Every `key=value` pair of the query string, in order.
///
/// Lookups take the first value for a key; an absent key reads as the empty
/// string, so a missing `item` names the item `""` and a missing `price`
/// fails to parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn item(&self) -> &str {
        self.first("item")
    }

    pub fn price(&self) -> &str {
        self.first("price")
    }
}

/// One `"<name>: $<price>"` line per item.
pub fn list_body(items: &[InventoryItem]) -> String {
    items.iter().map(|item| format!("{item}\n")).collect()
}

pub fn price_body(price: Dollars) -> String {
    format!("{price}\n")
}

pub fn created_body(item: &str, price: Dollars) -> String {
    format!("Created {item} with price {price}\n")
}

pub fn updated_body(item: &str, price: Dollars) -> String {
    format!("Updated {item} to price {price}\n")
}

pub fn deleted_body(item: &str) -> String {
    format!("Deleted {item}\n")
}
