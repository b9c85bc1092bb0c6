use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use labkit_core::{DomainError, DomainResult, Dollars};

use crate::item::InventoryItem;

/// In-memory price list: item name -> price.
///
/// A single `RwLock` guards the whole map. `list`/`price` take the read lock
/// and may run concurrently; `create`/`update`/`delete` take the write lock and
/// exclude everything else. Every operation holds its guard for its full
/// duration, so no caller observes a partially applied mutation.
///
/// Share it between request handlers as `Arc<InventoryStore>`.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: RwLock<HashMap<String, Dollars>>,
}

impl InventoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the service's initial stock: shoes at $50, socks at $5.
    pub fn seeded() -> Self {
        [
            ("shoes".to_string(), Dollars::from_whole(50)),
            ("socks".to_string(), Dollars::from_whole(5)),
        ]
        .into_iter()
        .collect()
    }

    /// Snapshot of every item, ordered by name.
    pub fn list(&self) -> Vec<InventoryItem> {
        let map = self.read();
        let mut items: Vec<InventoryItem> = map
            .iter()
            .map(|(name, price)| InventoryItem::new(name.clone(), *price))
            .collect();
        drop(map);

        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }

    pub fn price(&self, name: &str) -> DomainResult<Dollars> {
        self.read()
            .get(name)
            .copied()
            .ok_or_else(|| item_not_found(name))
    }

    /// Insert `name`, or overwrite its price if it already exists.
    ///
    /// Negative prices are accepted here; only `update` rejects them.
    pub fn create(&self, name: &str, price: Dollars) -> Dollars {
        self.write().insert(name.to_string(), price);
        price
    }

    /// Change the price of an existing item.
    ///
    /// The price is validated before the item is looked up, so a negative price
    /// for a missing item reports `InvalidArgument`.
    pub fn update(&self, name: &str, price: Dollars) -> DomainResult<Dollars> {
        if price.is_negative() {
            return Err(DomainError::invalid_argument(format!(
                "price must not be negative, got {price}"
            )));
        }

        let mut map = self.write();
        let slot = map.get_mut(name).ok_or_else(|| item_not_found(name))?;
        *slot = price;
        Ok(price)
    }

    /// Remove an existing item, returning the price it had.
    pub fn delete(&self, name: &str) -> DomainResult<Dollars> {
        self.write().remove(name).ok_or_else(|| item_not_found(name))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Each mutation is a single map call, so a holder that panicked cannot have
    // left the map half-written; recover the guard instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Dollars>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Dollars>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<(String, Dollars)> for InventoryStore {
    fn from_iter<I: IntoIterator<Item = (String, Dollars)>>(iter: I) -> Self {
        Self {
            items: RwLock::new(iter.into_iter().collect()),
        }
    }
}

fn item_not_found(name: &str) -> DomainError {
    DomainError::not_found(format!("item {name:?}"))
}
