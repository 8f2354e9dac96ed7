//! Time-boxed response cache shared by all fetch operations
//!
//! The cache is owned by the [`ApiClient`](crate::data_fetcher::api::ApiClient)
//! instance rather than living in process-wide state, so independent client
//! configurations (and tests) get isolated caches.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// A single cached response body with its storage timestamp.
///
/// Entries are written whole and never mutated in place; an overwrite
/// replaces the entry together with its timestamp.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub body: String,
    pub stored_at: Instant,
}

impl CachedResponse {
    fn new(body: String) -> Self {
        Self {
            body,
            stored_at: Instant::now(),
        }
    }

    /// An entry is valid only while younger than the cache TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}

/// Bounded-lifetime response store keyed by request signature.
///
/// Expired entries behave as misses but stay in the map until an explicit
/// [`clear_expired`](ResponseCache::clear_expired) call or an overwrite
/// (lazy eviction). There is no size-based eviction: the key space is the
/// fixed set of endpoints times a handful of parameter combinations.
#[derive(Debug)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CachedResponse>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// The TTL every entry in this cache is bounded by.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Retrieves the cached body for `key` if it is still valid.
    pub async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;

        match entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                debug!(
                    "Cache hit: key={}, age={:?}, body_size={}",
                    key,
                    entry.stored_at.elapsed(),
                    entry.body.len()
                );
                Some(entry.body.clone())
            }
            Some(entry) => {
                debug!(
                    "Cache entry expired: key={}, age={:?}, ttl={:?}",
                    key,
                    entry.stored_at.elapsed(),
                    self.ttl
                );
                None
            }
            None => {
                debug!("Cache miss: key={key}");
                None
            }
        }
    }

    /// Stores `body` under `key`, replacing any previous entry and
    /// restarting its lifetime.
    pub async fn set(&self, key: String, body: String) {
        debug!("Caching response: key={}, body_size={}", key, body.len());
        let mut entries = self.entries.write().await;
        entries.insert(key, CachedResponse::new(body));
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        debug!("Cleared response cache ({dropped} entries)");
    }

    /// Drops only the entries whose lifetime has elapsed.
    pub async fn clear_expired(&self) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl));
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("Evicted {dropped} expired cache entries ({} remain)", entries.len());
        }
    }

    /// Current number of stored entries, valid or expired. For monitoring.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
