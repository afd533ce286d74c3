// src/backend/utils/time.rs
use crate::models::common::Timestamp;
use chrono::Utc;

/// Returns the current wall-clock time.
pub fn now() -> Timestamp {
    Utc::now()
}
