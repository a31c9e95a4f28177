use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use fabplan_core::{DomainError, DomainResult, ItemId};

/// What an item is used for in the production flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    RawMaterial,
    Component,
    FinishedGood,
}

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: i64,
    /// At or below this level the item shows up in the low-stock view.
    pub reorder_level: i64,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub sku: String,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: i64,
    pub reorder_level: i64,
    pub location: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<ItemCategory>,
    pub quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    pub location: Option<String>,
}

/// In-memory inventory store, seeded with demo stock.
#[derive(Debug, Default)]
pub struct InventoryStore {
    inner: Mutex<Vec<InventoryItem>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let store = Self::new();
        let rows: [(&str, ItemCategory, i64, i64); 4] = [
            ("Steel plate 3mm", ItemCategory::RawMaterial, 420, 100),
            ("Bearing 6204", ItemCategory::Component, 35, 50),
            ("Hydraulic seal kit", ItemCategory::Component, 180, 40),
            ("Gear housing", ItemCategory::FinishedGood, 12, 10),
        ];
        for (i, (name, category, quantity, reorder_level)) in rows.into_iter().enumerate() {
            let _ = store.create(NewItem {
                sku: format!("SKU-{:04}", 100 + i as u32),
                name: name.to_string(),
                category,
                quantity,
                reorder_level,
                location: format!("WH1-A{}", i + 1),
            });
        }
        store
    }

    pub fn list(&self) -> Vec<InventoryItem> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: ItemId) -> Option<InventoryItem> {
        self.inner.lock().unwrap().iter().find(|i| i.id == id).cloned()
    }

    /// Items at or below their reorder level.
    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.quantity <= i.reorder_level)
            .cloned()
            .collect()
    }

    pub fn create(&self, new: NewItem) -> DomainResult<InventoryItem> {
        if new.sku.trim().is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        if new.quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }

        let mut items = self.inner.lock().unwrap();
        if items.iter().any(|i| i.sku == new.sku) {
            return Err(DomainError::conflict(format!("duplicate sku: {}", new.sku)));
        }

        let item = InventoryItem {
            id: ItemId::new(),
            sku: new.sku,
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            reorder_level: new.reorder_level,
            location: new.location,
        };
        items.push(item.clone());
        Ok(item)
    }

    pub fn update(&self, id: ItemId, update: ItemUpdate) -> DomainResult<InventoryItem> {
        let mut items = self.inner.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(quantity) = update.quantity {
            if quantity < 0 {
                return Err(DomainError::validation("quantity must not be negative"));
            }
            item.quantity = quantity;
        }
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(reorder_level) = update.reorder_level {
            item.reorder_level = reorder_level;
        }
        if let Some(location) = update.location {
            item.location = location;
        }
        Ok(item.clone())
    }

    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut items = self.inner.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
