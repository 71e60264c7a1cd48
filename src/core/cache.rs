//! Time-bounded query cache for backend reads.
//!
//! The cache is a capability handed to the service at construction time:
//! `TtlCache` keeps entries in memory until they expire, `NoCache` turns
//! caching off (tests, `cache_ttl_secs: 0`).

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

pub trait QueryCache: Send + Sync {
    /// Live value for `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    fn put(&self, key: &str, value: Value, ttl: Duration);

    fn invalidate(&self, key: &str);

    fn invalidate_by_prefix(&self, prefix: &str);
}

/// Return the cached value for `key`, or run `fetcher` and cache its result.
///
/// Fetch errors are returned as-is and nothing is cached.
pub fn get_or_fetch<T, F>(cache: &dyn QueryCache, key: &str, ttl: Duration, fetcher: F) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> AppResult<T>,
{
    if let Some(hit) = cache.get(key) {
        match serde_json::from_value(hit) {
            Ok(v) => {
                tracing::trace!(key, "cache hit");
                return Ok(v);
            }
            // stale shape: drop it and refetch
            Err(_) => cache.invalidate(key),
        }
    }

    tracing::trace!(key, "cache miss");
    let fresh = fetcher()?;
    cache.put(key, serde_json::to_value(&fresh)?, ttl);
    Ok(fresh)
}

struct Entry {
    value: Value,
    expires_at: Instant,
}

#[derive(Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // a poisoned map only holds cached reads; keep using it
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryCache for TtlCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(e) if e.expires_at > Instant::now() => Some(e.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: Value, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        self.lock().insert(key.to_string(), Entry { value, expires_at });
    }

    fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    fn invalidate_by_prefix(&self, prefix: &str) {
        self.lock().retain(|k, _| !k.starts_with(prefix));
    }
}

/// Disabled cache: every read goes to the backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl QueryCache for NoCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn put(&self, _key: &str, _value: Value, _ttl: Duration) {}

    fn invalidate(&self, _key: &str) {}

    fn invalidate_by_prefix(&self, _prefix: &str) {}
}
