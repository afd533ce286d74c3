// src/backend/models/mod.rs
pub mod common;
pub mod item;
pub mod user;

// Re-export common types/enums for easier access
pub use common::*;
pub use item::{InventoryItem, ItemPatch};
pub use user::{PublicUser, UserAccount};
