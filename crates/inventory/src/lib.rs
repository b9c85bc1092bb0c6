//! Inventory domain module.
//!
//! An in-memory price list guarded by a single reader-writer lock. No IO, no
//! HTTP; the API crate wires this into request handlers.

pub mod item;
pub mod store;

pub use item::InventoryItem;
pub use store::InventoryStore;
