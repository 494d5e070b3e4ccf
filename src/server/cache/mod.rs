//! Response cache with fixed expirations.
//!
//! Controllers memoize read-heavy projections through [`AppCache`]. Values are
//! stored as JSON so the same handle works against the in-process store and
//! redis. Cache failures never fail a request: they are logged and treated as
//! a miss.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::server::error::AppError;

/// Fixed expirations per kind of data.
pub mod ttl {
    use std::time::Duration;

    pub const DEFAULT: Duration = Duration::from_secs(60);
    pub const NEWS: Duration = Duration::from_secs(5 * 60);
    pub const SQUADS: Duration = Duration::from_secs(30 * 60);
    /// Search results, advertisements and menu lists.
    pub const LONG: Duration = Duration::from_secs(100 * 60);
    pub const CITIES: Duration = Duration::from_secs(500 * 60);
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to (de)serialize cached value: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Key/value backend holding serialized values with an expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    async fn remove(&self, key: &str) -> Result<(), CacheError>;

    /// Removes every key starting with `prefix`. Stores that cannot enumerate
    /// keys cheaply may leave entries to expire on their own.
    async fn remove_prefix(&self, prefix: &str) -> Result<(), CacheError>;

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> usize;
}

/// Cloneable cache handle stored in `AppState`.
#[derive(Clone)]
pub struct AppCache {
    store: Arc<dyn CacheStore>,
}

impl AppCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// In-process cache, used when no redis URL is configured and in tests.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns the cached value for `key`, or computes, stores and returns it.
    ///
    /// Only successful results are stored. A cache backend failure is logged
    /// and the value is computed as if the key were absent.
    ///
    /// # Arguments
    /// - `key` - Cache key, including any parameters that shape the result
    /// - `ttl` - Expiration applied when the value is stored
    /// - `f` - Producer awaited on a miss
    ///
    /// # Returns
    /// - `Ok(T)` - Cached or freshly computed value
    /// - `Err(AppError)` - Error returned by the producer
    pub async fn get_or_insert_with<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        f: F,
    ) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => tracing::warn!("Discarding unreadable cache entry {}: {}", key, e),
            },
            Ok(None) => tracing::debug!("Cache miss for {}", key),
            Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
        }

        let value = f().await?;

        match serde_json::to_string(&value) {
            Ok(raw) => {
                if let Err(e) = self.store.set(key, raw, ttl).await {
                    tracing::warn!("Cache write failed for {}: {}", key, e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize value for {}: {}", key, e),
        }

        Ok(value)
    }

    pub async fn invalidate(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            tracing::warn!("Failed to invalidate cache key {}: {}", key, e);
        }
    }

    pub async fn invalidate_prefix(&self, prefix: &str) {
        if let Err(e) = self.store.remove_prefix(prefix).await {
            tracing::warn!("Failed to invalidate cache prefix {}: {}", prefix, e);
        }
    }

    pub async fn purge_expired(&self) -> usize {
        self.store.purge_expired().await
    }
}
