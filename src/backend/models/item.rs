// src/backend/models/item.rs
use crate::models::common::{Category, ItemId, ItemStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// A stock record. JSON field names follow the client convention
/// (camelCase, `minStock`, `createdAt`).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: Category,
    pub price: f64,
    pub quantity: u32,
    pub min_stock: u32,
    pub supplier: String,
    pub status: ItemStatus,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sparse update. A field that is absent (or JSON null) keeps its previous
/// value; an explicit zero or empty string overwrites. `image` carries the
/// full Option so a patch can also clear the reference.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub min_stock: Option<u32>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub image: Option<Option<String>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.sku.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.min_stock.is_none()
            && self.supplier.is_none()
            && self.status.is_none()
            && self.image.is_none()
    }
}

impl InventoryItem {
    /// Merge supplied fields over the current record. Timestamps are the
    /// caller's concern.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(sku) = &patch.sku {
            self.sku = sku.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(supplier) = &patch.supplier {
            self.supplier = supplier.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
    }
}
