//! Catalog cache: a string key-value store holding a timestamped catalog envelope.

use crate::catalog::Catalog;
use crate::error::StorageError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod persistence;

pub use persistence::SledCacheStore;

/// Fixed key of the catalog envelope.
pub const CATALOG_CACHE_KEY: &str = "concierge_catalog_v11";

/// Cached catalogs stay valid for 24 hours.
pub const CATALOG_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// External key-value store for serialized cache entries.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store, for tests and cache-less runs.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Serialized form: `{ "timestamp": <epoch ms>, "data": <catalog> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub timestamp: i64,
    pub data: Catalog,
}

impl CacheEntry {
    pub fn new(timestamp: i64, data: Catalog) -> Self {
        Self { timestamp, data }
    }

    /// Milliseconds since the entry was written. `None` when the stored timestamp is in
    /// the future or too far in the past to measure.
    pub fn age_ms(&self, now_ms: i64) -> Option<i64> {
        now_ms.checked_sub(self.timestamp).filter(|age| *age >= 0)
    }

    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        self.age_ms(now_ms).is_some_and(|age| age < ttl_ms)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// What the cache currently holds for the catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Missing,
    Fresh { age_ms: i64, events: usize },
    Expired { age_ms: i64, events: usize },
    Corrupt(String),
}

/// Inspect the catalog entry without regenerating anything.
pub fn inspect(store: &dyn CacheStore, now_ms: i64, ttl_ms: i64) -> CacheStatus {
    let raw = match store.get(CATALOG_CACHE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CacheStatus::Missing,
        Err(e) => return CacheStatus::Corrupt(e.to_string()),
    };
    match CacheEntry::from_json(&raw) {
        Ok(entry) => {
            let events = entry.data.len();
            match entry.age_ms(now_ms) {
                Some(age_ms) if age_ms < ttl_ms => CacheStatus::Fresh { age_ms, events },
                Some(age_ms) => CacheStatus::Expired { age_ms, events },
                None => CacheStatus::Corrupt(format!(
                    "timestamp {} out of range",
                    entry.timestamp
                )),
            }
        }
        Err(e) => CacheStatus::Corrupt(e.to_string()),
    }
}

/// Source of "now" in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
