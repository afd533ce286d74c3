// src/backend/utils/mod.rs
pub mod crypto;
pub mod jwt;
pub mod time;
