// src/backend/models/common.rs
use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = Uuid;
pub type ItemId = Uuid;
pub type Timestamp = DateTime<Utc>;

/// Fixed product categories. Serialized exactly as displayed in the client.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Accessories,
    Cables,
    Tools,
    Other,
}

impl Category {
    pub fn parse(s: &str) -> Result<Self, ServiceError> {
        match s {
            "Electronics" => Ok(Category::Electronics),
            "Accessories" => Ok(Category::Accessories),
            "Cables" => Ok(Category::Cables),
            "Tools" => Ok(Category::Tools),
            "Other" => Ok(Category::Other),
            other => Err(ServiceError::InvalidInput(format!(
                "unknown category: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Cables => "Cables",
            Category::Tools => "Tools",
            Category::Other => "Other",
        }
    }
}

/// Stock status. Independently settable, never derived from quantity
/// versus min_stock.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl ItemStatus {
    pub fn parse(s: &str) -> Result<Self, ServiceError> {
        match s {
            "in-stock" => Ok(ItemStatus::InStock),
            "low-stock" => Ok(ItemStatus::LowStock),
            "out-of-stock" => Ok(ItemStatus::OutOfStock),
            other => Err(ServiceError::InvalidInput(format!(
                "unknown status: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "in-stock",
            ItemStatus::LowStock => "low-stock",
            ItemStatus::OutOfStock => "out-of-stock",
        }
    }
}

/// Parses a path id segment into a store identifier. A malformed id is a
/// distinct failure from a well-formed id with no record behind it.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::InvalidId(raw.to_string()))
}
