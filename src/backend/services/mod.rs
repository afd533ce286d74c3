// src/backend/services/mod.rs
pub mod auth_service;
pub mod inventory_service;
pub mod upload_service;
