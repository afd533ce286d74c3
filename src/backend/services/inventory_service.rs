// src/backend/services/inventory_service.rs
//
// CRUD over inventory records. Listing goes through the query core in
// storage::query; writes lean on the store's SKU-uniqueness backstop.
use crate::{
    error::ServiceError,
    models::common::{parse_id, Category, ItemStatus},
    models::{InventoryItem, ItemPatch},
    storage::{items as item_storage, ItemPage, ItemQuery, Store},
    utils::time,
};
use serde::Deserialize;
use tracing::info;

/// Create payload. Category and status arrive as wire strings and are
/// checked against the fixed sets here.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub min_stock: Option<u32>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn required(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.as_str()).filter(|s| !s.is_empty())
}

/// Filtered, sorted, paginated listing.
pub fn list(store: &Store, query: &ItemQuery) -> Result<ItemPage, ServiceError> {
    Ok(query.apply(item_storage::all(store)?))
}

/// Fetch by id. A malformed id is rejected before the store is consulted.
pub fn get(store: &Store, raw_id: &str) -> Result<InventoryItem, ServiceError> {
    let id = parse_id(raw_id)?;
    item_storage::get(store, &id)?.ok_or_else(|| ServiceError::NotFound("Item".to_string()))
}

/// Creates a record. `uploaded_image` is the stored path of a multipart
/// upload, used when the payload carries no `image` field of its own.
pub fn create(
    store: &Store,
    data: CreateItemData,
    uploaded_image: Option<String>,
) -> Result<InventoryItem, ServiceError> {
    // 1. Required fields: name, sku, category. Empty strings count as
    //    missing, same as an absent field.
    let (Some(name), Some(sku), Some(category)) = (
        required(data.name.as_ref()),
        required(data.sku.as_ref()),
        required(data.category.as_ref()),
    ) else {
        return Err(ServiceError::InvalidInput(
            "name, sku and category are required".to_string(),
        ));
    };

    // 2. Fixed-set and bounds checks.
    let category = Category::parse(category)?;
    let status = match data.status.as_deref() {
        Some(s) => ItemStatus::parse(s)?,
        None => ItemStatus::default(),
    };
    let price = data.price.unwrap_or(0.0);
    if price < 0.0 || !price.is_finite() {
        return Err(ServiceError::InvalidInput(
            "price must be a non-negative number".to_string(),
        ));
    }

    // 3. Duplicate SKU check; the store repeats it under the write lock.
    if item_storage::all(store)?.iter().any(|i| i.sku == sku) {
        return Err(ServiceError::DuplicateSku(sku.to_string()));
    }

    let created_at = time::now();
    let item = InventoryItem {
        id: uuid::Uuid::new_v4(),
        name: name.to_string(),
        description: data.description.unwrap_or_default(),
        sku: sku.to_string(),
        category,
        price,
        quantity: data.quantity.unwrap_or(0),
        min_stock: data.min_stock.unwrap_or(0),
        supplier: data.supplier.unwrap_or_default(),
        status,
        image: data.image.or(uploaded_image),
        created_at,
        updated_at: created_at,
    };
    item_storage::insert(store, item.clone())?;

    info!(sku = %item.sku, "inventory item created");
    Ok(item)
}

/// Partial update: supplied fields overwrite, absent ones are kept. A SKU
/// change is checked against every other record first.
pub fn update(
    store: &Store,
    raw_id: &str,
    mut patch: ItemPatch,
    uploaded_image: Option<String>,
) -> Result<InventoryItem, ServiceError> {
    let id = parse_id(raw_id)?;
    let mut item = item_storage::get(store, &id)?
        .ok_or_else(|| ServiceError::NotFound("Item".to_string()))?;

    if let Some(new_sku) = &patch.sku {
        if *new_sku != item.sku && item_storage::sku_taken_by_other(store, new_sku, &id)? {
            return Err(ServiceError::DuplicateSku(new_sku.clone()));
        }
    }

    // An uploaded file only applies when the payload didn't set `image`.
    if patch.image.is_none() {
        if let Some(path) = uploaded_image {
            patch.image = Some(Some(path));
        }
    }

    item.apply(&patch);
    item.updated_at = time::now();
    item_storage::update(store, item.clone())?;

    info!(sku = %item.sku, "inventory item updated");
    Ok(item)
}

/// Hard delete, confirmation message on success.
pub fn delete(store: &Store, raw_id: &str) -> Result<String, ServiceError> {
    let id = parse_id(raw_id)?;
    let removed = item_storage::remove(store, &id)?
        .ok_or_else(|| ServiceError::NotFound("Item".to_string()))?;

    info!(sku = %removed.sku, "inventory item removed");
    Ok("Item removed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn widget() -> CreateItemData {
        CreateItemData {
            name: Some("Widget".to_string()),
            sku: Some("W-1".to_string()),
            category: Some("Tools".to_string()),
            price: Some(9.99),
            quantity: Some(5),
            min_stock: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn create_applies_defaults() {
        let store = Store::in_memory();
        let item = create(&store, widget(), None).unwrap();
        assert_eq!(item.status, ItemStatus::InStock);
        assert_eq!(item.description, "");
        assert_eq!(item.supplier, "");
        assert!(item.image.is_none());
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn create_requires_name_sku_category() {
        let store = Store::in_memory();
        for broken in [
            CreateItemData { name: None, ..widget() },
            CreateItemData { sku: Some(String::new()), ..widget() },
            CreateItemData { category: None, ..widget() },
        ] {
            let err = create(&store, broken, None).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)));
        }
    }

    #[test]
    fn create_rejects_unknown_category_and_negative_price() {
        let store = Store::in_memory();
        let err = create(
            &store,
            CreateItemData { category: Some("Furniture".to_string()), ..widget() },
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let err = create(
            &store,
            CreateItemData { price: Some(-1.0), ..widget() },
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn duplicate_sku_rejected() {
        let store = Store::in_memory();
        create(&store, widget(), None).unwrap();
        let err = create(&store, widget(), None).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateSku(_)));
    }

    #[test]
    fn body_image_wins_over_upload() {
        let store = Store::in_memory();
        let data = CreateItemData {
            image: Some("/uploads/manual.png".to_string()),
            ..widget()
        };
        let item = create(&store, data, Some("/uploads/from-file.png".to_string())).unwrap();
        assert_eq!(item.image.as_deref(), Some("/uploads/manual.png"));

        let data = CreateItemData { sku: Some("W-2".to_string()), ..widget() };
        let item = create(&store, data, Some("/uploads/from-file.png".to_string())).unwrap();
        assert_eq!(item.image.as_deref(), Some("/uploads/from-file.png"));
    }

    #[test]
    fn update_zero_overwrites_and_empty_patch_keeps() {
        let store = Store::in_memory();
        let item = create(&store, widget(), None).unwrap();

        let patch: ItemPatch = serde_json::from_str(r#"{"quantity": 0}"#).unwrap();
        let updated = update(&store, &item.id.to_string(), patch, None).unwrap();
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.name, "Widget");

        let unchanged = update(&store, &item.id.to_string(), ItemPatch::default(), None).unwrap();
        assert_eq!(unchanged.quantity, 0);
        assert_eq!(unchanged.sku, "W-1");
    }

    #[test]
    fn update_sku_collision_with_other_record() {
        let store = Store::in_memory();
        create(&store, widget(), None).unwrap();
        let other = create(
            &store,
            CreateItemData { sku: Some("W-2".to_string()), ..widget() },
            None,
        )
        .unwrap();

        let patch: ItemPatch = serde_json::from_str(r#"{"sku": "W-1"}"#).unwrap();
        let err = update(&store, &other.id.to_string(), patch, None).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateSku(_)));

        // Re-submitting the record's own SKU is not a collision.
        let patch: ItemPatch = serde_json::from_str(r#"{"sku": "W-2"}"#).unwrap();
        assert!(update(&store, &other.id.to_string(), patch, None).is_ok());
    }

    #[test]
    fn update_applies_upload_when_payload_has_no_image() {
        let store = Store::in_memory();
        let item = create(&store, widget(), None).unwrap();
        let updated = update(
            &store,
            &item.id.to_string(),
            ItemPatch::default(),
            Some("/uploads/new.png".to_string()),
        )
        .unwrap();
        assert_eq!(updated.image.as_deref(), Some("/uploads/new.png"));
    }

    #[test]
    fn id_errors_are_distinguished() {
        let store = Store::in_memory();
        let err = get(&store, "not-a-valid-id").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId(_)));

        let err = get(&store, &Uuid::new_v4().to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = delete(&store, &Uuid::new_v4().to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = Store::in_memory();
        let item = create(&store, widget(), None).unwrap();
        assert_eq!(delete(&store, &item.id.to_string()).unwrap(), "Item removed");
        assert!(matches!(
            get(&store, &item.id.to_string()).unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
