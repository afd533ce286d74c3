// src/backend/lib.rs

pub mod adapter;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Hosts call this once at startup;
/// `RUST_LOG` controls the filter, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
