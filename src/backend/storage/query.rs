// src/backend/storage/query.rs
//
// Query construction for the inventory listing: free-text search over
// name/description/sku, exact category/status filters, `field:direction`
// ordering, and offset pagination.
use crate::models::common::{Category, ItemStatus};
use crate::models::InventoryItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
/// Upper bound on page size; an unbounded limit would let one request
/// drag the whole collection out.
pub const MAX_LIMIT: u32 = 100;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring, matched against name OR description OR sku.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    /// `field:direction`, e.g. `price:asc`. Any direction other than `asc`
    /// (including a missing one) sorts descending.
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ItemPage {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub count: u32,
    pub items: Vec<InventoryItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortField {
    Name,
    Sku,
    Category,
    Price,
    Quantity,
    MinStock,
    Supplier,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Wire names match the JSON field names of the item record. An unknown
    /// field keeps the default newest-first order.
    fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortField::Name),
            "sku" => Some(SortField::Sku),
            "category" => Some(SortField::Category),
            "price" => Some(SortField::Price),
            "quantity" => Some(SortField::Quantity),
            "minStock" => Some(SortField::MinStock),
            "supplier" => Some(SortField::Supplier),
            "status" => Some(SortField::Status),
            "createdAt" => Some(SortField::CreatedAt),
            "updatedAt" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }

    fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Sku => a.sku.cmp(&b.sku),
            SortField::Category => a.category.as_str().cmp(b.category.as_str()),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::MinStock => a.min_stock.cmp(&b.min_stock),
            SortField::Supplier => a.supplier.cmp(&b.supplier),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl ItemQuery {
    fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        true
    }

    /// Resolves the requested ordering. Default: newest-created first.
    /// `field:asc` sorts ascending; any other direction token, or a bare
    /// field name, sorts descending.
    fn ordering(&self) -> (SortField, bool) {
        let Some(sort) = &self.sort else {
            return (SortField::CreatedAt, false);
        };
        let mut parts = sort.splitn(2, ':');
        let field = parts.next().unwrap_or_default();
        let ascending = parts.next() == Some("asc");
        match SortField::parse(field) {
            Some(field) => (field, ascending),
            None => (SortField::CreatedAt, false),
        }
    }

    /// Page and limit with zero values coerced to the defaults and the
    /// limit capped.
    fn pagination(&self) -> (u32, u32) {
        let page = match self.page {
            Some(0) | None => DEFAULT_PAGE,
            Some(p) => p,
        };
        let limit = match self.limit {
            Some(0) | None => DEFAULT_LIMIT,
            Some(l) => l.min(MAX_LIMIT),
        };
        (page, limit)
    }

    /// Runs the query over a full scan of the collection.
    pub fn apply(&self, items: Vec<InventoryItem>) -> ItemPage {
        let mut matched: Vec<InventoryItem> =
            items.into_iter().filter(|i| self.matches(i)).collect();

        let (field, ascending) = self.ordering();
        matched.sort_by(|a, b| {
            let ord = field.compare(a, b);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        let (page, limit) = self.pagination();
        let total = matched.len() as u64;
        let pages = ((total + limit as u64 - 1) / limit as u64) as u32;
        let skip = ((page - 1) as usize).saturating_mul(limit as usize);

        let slice: Vec<InventoryItem> = matched
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .collect();

        ItemPage {
            page,
            pages,
            total,
            count: slice.len() as u32,
            items: slice,
        }
    }
}
