// ============================================================================
// Menu Infrastructure - In-Process Tree Cache
// File: crates/menu-infrastructure/src/cache/memory.rs
// ============================================================================
//! Concurrent in-process tree cache with lazy TTL expiry

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use menu_core::domain::SharedForest;
use menu_core::error::DomainError;
use menu_core::ports::TreeCache;

struct Entry {
    forest: SharedForest,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Forests are shared by `Arc`; nothing is copied on read.
#[derive(Default)]
pub struct MemoryTreeCache {
    map: DashMap<String, Entry>,
}

impl MemoryTreeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet purged
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove `key` only if the stored entry is still expired at `now`;
    /// a put landing after the caller's check survives.
    fn evict_expired(&self, key: &str, now: Instant) -> bool {
        self.map.remove_if(key, |_, entry| entry.is_expired(now)).is_some()
    }

    /// Drop every expired entry and return how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.map.len();
        self.map.retain(|_, entry| !entry.is_expired(now));
        let purged = before.saturating_sub(self.map.len());
        if purged > 0 {
            debug!("Purged {} expired menu trees", purged);
        }
        purged
    }
}

#[async_trait]
impl TreeCache for MemoryTreeCache {
    async fn get(&self, key: &str) -> Result<Option<SharedForest>, DomainError> {
        let now = Instant::now();
        let Some(entry) = self.map.get(key) else {
            return Ok(None);
        };
        if entry.is_expired(now) {
            drop(entry);
            self.evict_expired(key, now);
            return Ok(None);
        }
        Ok(Some(SharedForest::clone(&entry.forest)))
    }

    async fn put(&self, key: &str, forest: SharedForest, ttl: Duration) -> Result<(), DomainError> {
        let entry = Entry {
            forest,
            expires_at: Instant::now() + ttl,
        };
        self.map.insert(key.to_string(), entry);
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), DomainError> {
        self.map.remove(key);
        Ok(())
    }
}
