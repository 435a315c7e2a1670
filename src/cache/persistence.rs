//! Sled-backed cache store.

use super::CacheStore;
use crate::error::StorageError;
use std::path::Path;

pub struct SledCacheStore {
    db: sled::Db,
}

impl SledCacheStore {
    /// Open (or create) a sled database at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            StorageError::OpenFailed(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(Self { db })
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(|e| StorageError::WriteFailed {
            key: "*".to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

impl CacheStore for SledCacheStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.db.get(key.as_bytes()).map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        value
            .map(|bytes| {
                String::from_utf8(bytes.to_vec()).map_err(|e| StorageError::ReadFailed {
                    key: key.to_string(),
                    message: format!("value is not UTF-8: {}", e),
                })
            })
            .transpose()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        self.flush()
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .remove(key.as_bytes())
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        self.flush()
    }
}
