// src/backend/storage/store.rs
use crate::error::ServiceError;
use crate::models::{InventoryItem, ItemId, UserAccount, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The two record collections, serialized as one JSON snapshot.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct StoreData {
    pub users: BTreeMap<UserId, UserAccount>,
    pub items: BTreeMap<ItemId, InventoryItem>,
}

/// Process-wide store handle. Initialized once at startup and passed into
/// the services, so tests can inject an in-memory instance instead.
///
/// Mutations run under a single write lock and flush the full snapshot to
/// disk before the lock is released, which makes each call an atomic
/// read-modify-write against both collections.
#[derive(Clone)]
pub struct Store {
    data: Arc<RwLock<StoreData>>,
    path: Option<PathBuf>,
}

impl Store {
    /// Opens (or creates) a file-backed store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                ServiceError::StorageError(format!("read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                ServiceError::StorageError(format!("parse {}: {e}", path.display()))
            })?
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ServiceError::StorageError(format!(
                            "create {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
            StoreData::default()
        };
        Ok(Store {
            data: Arc::new(RwLock::new(data)),
            path: Some(path),
        })
    }

    /// A store with no backing file. Used by tests and by hosts that do not
    /// need persistence.
    pub fn in_memory() -> Self {
        Store {
            data: Arc::new(RwLock::new(StoreData::default())),
            path: None,
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreData>, ServiceError> {
        self.data
            .read()
            .map_err(|_| ServiceError::StorageError("store lock poisoned".to_string()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreData>, ServiceError> {
        self.data
            .write()
            .map_err(|_| ServiceError::StorageError("store lock poisoned".to_string()))
    }

    /// Writes the snapshot while still holding the write lock.
    pub(crate) fn flush(&self, data: &StoreData) -> Result<(), ServiceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let raw = serde_json::to_string_pretty(data)
            .map_err(|e| ServiceError::StorageError(format!("serialize snapshot: {e}")))?;
        std::fs::write(path, raw)
            .map_err(|e| ServiceError::StorageError(format!("write {}: {e}", path.display())))
    }
}
