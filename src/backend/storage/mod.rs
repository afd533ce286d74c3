// src/backend/storage/mod.rs
pub mod items;
pub mod query;
pub mod store;
pub mod users;

// Re-export key storage types for easier access
pub use query::{ItemPage, ItemQuery};
pub use store::Store;
