// ============================================================================
// Menu Infrastructure - Adapter Wiring
// File: crates/menu-infrastructure/src/bootstrap.rs
// ============================================================================
//! Build adapters from `AppConfig`

use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use menu_core::ports::TreeCache;
use menu_core::repositories::{MenuItemRepository, MenuRepository};
use menu_shared::config::{AppConfig, CacheStore, MenuSettings};

use crate::cache::{create_redis_pool, MemoryTreeCache, RedisTreeCache};
use crate::database::{PgMenuItemRepository, PgMenuRepository};

/// Tree cache selected by `cache.store`
pub fn build_tree_cache(config: &AppConfig) -> anyhow::Result<Arc<dyn TreeCache>> {
    match config.cache.store {
        CacheStore::Memory => {
            info!("Using in-process menu tree cache");
            Ok(Arc::new(MemoryTreeCache::new()))
        }
        CacheStore::Redis => {
            let pool = create_redis_pool(&config.redis).context("Failed to create redis pool")?;
            info!("Using redis menu tree cache");
            Ok(Arc::new(RedisTreeCache::new(pool)))
        }
    }
}

/// Row store repositories on the configured tables
pub fn build_repositories(
    pool: PgPool,
    tables: &MenuSettings,
) -> (Arc<dyn MenuRepository>, Arc<dyn MenuItemRepository>) {
    let menus = PgMenuRepository::with_table(pool.clone(), tables.table.clone());
    let items = PgMenuItemRepository::with_table(pool, tables.item_table.clone());
    (Arc::new(menus), Arc::new(items))
}
