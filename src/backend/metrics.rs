// src/backend/metrics.rs
use crate::error::ServiceError;
use crate::models::common::ItemStatus;
use crate::storage::Store;
use serde::{Deserialize, Serialize};

/// Point-in-time counts computed from the store. No counters are kept; the
/// snapshot is cheap enough to recompute per request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppMetrics {
    pub total_users: u32,
    pub verified_users: u32,
    pub total_items: u32,
    pub out_of_stock_items: u32,
    pub below_min_stock_items: u32,
    pub total_stock_value: f64,
}

pub fn collect(store: &Store) -> Result<AppMetrics, ServiceError> {
    let data = store.read()?;
    let mut metrics = AppMetrics {
        total_users: data.users.len() as u32,
        verified_users: data.users.values().filter(|u| u.is_verified).count() as u32,
        total_items: data.items.len() as u32,
        ..Default::default()
    };
    for item in data.items.values() {
        if item.status == ItemStatus::OutOfStock {
            metrics.out_of_stock_items += 1;
        }
        if item.quantity < item.min_stock {
            metrics.below_min_stock_items += 1;
        }
        metrics.total_stock_value += item.price * f64::from(item.quantity);
    }
    Ok(metrics)
}
