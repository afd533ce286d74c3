// src/backend/storage/items.rs
use crate::error::ServiceError;
use crate::models::{InventoryItem, ItemId};
use crate::storage::store::Store;

/// Inserts a new item. SKU uniqueness is enforced under the write lock, the
/// backstop behind the service-level duplicate check.
pub fn insert(store: &Store, item: InventoryItem) -> Result<(), ServiceError> {
    let mut data = store.write()?;
    if data.items.values().any(|i| i.sku == item.sku) {
        return Err(ServiceError::DuplicateSku(item.sku));
    }
    data.items.insert(item.id, item);
    store.flush(&data)
}

pub fn get(store: &Store, id: &ItemId) -> Result<Option<InventoryItem>, ServiceError> {
    Ok(store.read()?.items.get(id).cloned())
}

/// True when `sku` is already carried by a record other than `id`.
pub fn sku_taken_by_other(store: &Store, sku: &str, id: &ItemId) -> Result<bool, ServiceError> {
    Ok(store
        .read()?
        .items
        .values()
        .any(|i| i.sku == sku && i.id != *id))
}

/// Replaces an existing record wholesale. The same uniqueness backstop
/// applies when the replacement changed the SKU.
pub fn update(store: &Store, item: InventoryItem) -> Result<(), ServiceError> {
    let mut data = store.write()?;
    if !data.items.contains_key(&item.id) {
        return Err(ServiceError::NotFound("Item".to_string()));
    }
    if data
        .items
        .values()
        .any(|i| i.sku == item.sku && i.id != item.id)
    {
        return Err(ServiceError::DuplicateSku(item.sku));
    }
    data.items.insert(item.id, item);
    store.flush(&data)
}

/// Hard delete. Returns the removed record so callers can report on it.
pub fn remove(store: &Store, id: &ItemId) -> Result<Option<InventoryItem>, ServiceError> {
    let mut data = store.write()?;
    let removed = data.items.remove(id);
    if removed.is_some() {
        store.flush(&data)?;
    }
    Ok(removed)
}

pub fn all(store: &Store) -> Result<Vec<InventoryItem>, ServiceError> {
    Ok(store.read()?.items.values().cloned().collect())
}
