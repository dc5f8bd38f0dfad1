// ============================================================================
// Menu Infrastructure - Redis Tree Cache
// File: crates/menu-infrastructure/src/cache/redis.rs
// ============================================================================
//! Shared tree cache for multi-process deployments.
//!
//! Forests are stored as JSON strings with a Redis-side expiry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Connection, Pool, PoolConfig, Runtime};
use tracing::{debug, info};

use menu_core::domain::{Forest, SharedForest};
use menu_core::error::DomainError;
use menu_core::ports::TreeCache;
use menu_shared::config::RedisSettings;

pub fn create_redis_pool(settings: &RedisSettings) -> anyhow::Result<Pool> {
    let mut cfg = Config::from_url(settings.url.clone());
    cfg.pool = Some(PoolConfig::new(settings.max_connections as usize));
    let pool = cfg.create_pool(Some(Runtime::Tokio1))?;

    info!("Redis pool created (max {} connections)", settings.max_connections);
    Ok(pool)
}

pub struct RedisTreeCache {
    pool: Pool,
}

impl RedisTreeCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<Connection, DomainError> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::CacheError(format!("redis pool: {}", e)))
    }
}

/// Redis expiry is whole seconds and must be positive
fn expiry_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl TreeCache for RedisTreeCache {
    async fn get(&self, key: &str) -> Result<Option<SharedForest>, DomainError> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let Some(payload) = payload else {
            return Ok(None);
        };
        let forest: Forest = serde_json::from_str(&payload)
            .map_err(|e| DomainError::CacheError(format!("corrupt tree {}: {}", key, e)))?;

        Ok(Some(Arc::new(forest)))
    }

    async fn put(&self, key: &str, forest: SharedForest, ttl: Duration) -> Result<(), DomainError> {
        let payload = serde_json::to_string(forest.as_ref())
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        let mut conn = self.connection().await?;
        let _: () = conn
            .set_ex(key, payload, expiry_seconds(ttl))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        debug!("Stored menu tree {} in redis", key);
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        let _: () = conn
            .del(key)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;
        Ok(())
    }
}
