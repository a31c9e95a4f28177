//! Inventory mock data: item model and seeded in-memory store.

pub mod item;

pub use item::{InventoryItem, InventoryStore, ItemCategory, ItemUpdate, NewItem};
