// ============================================================================
// Menu Core - Menu Builder Service
// File: crates/menu-core/src/services/menu_builder.rs
// ============================================================================
//! Public read API: menus, cached viewer-filtered trees, flat trees,
//! breadcrumbs, and cache eviction.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use menu_shared::config::CacheSettings;
use tracing::{debug, info, warn};

use crate::domain::{Breadcrumb, Forest, Menu, SharedForest, Viewer};
use crate::error::DomainError;
use crate::ports::{MenuMutationHook, MutationKind, TreeCache};
use crate::repositories::{MenuItemRepository, MenuRepository};
use crate::services::breadcrumbs;
use crate::tree::{assemble, flatten, VisibilityRules};

/// Menu tree service. Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct MenuBuilder {
    menus: Arc<dyn MenuRepository>,
    items: Arc<dyn MenuItemRepository>,
    cache: Arc<dyn TreeCache>,
    rules: VisibilityRules,
    cache_prefix: String,
    cache_ttl: Duration,
}

impl MenuBuilder {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        items: Arc<dyn MenuItemRepository>,
        cache: Arc<dyn TreeCache>,
        rules: VisibilityRules,
    ) -> Self {
        let defaults = CacheSettings::default();
        Self {
            menus,
            items,
            cache,
            rules,
            cache_prefix: defaults.key_prefix.clone(),
            cache_ttl: defaults.ttl(),
        }
    }

    pub fn with_cache_settings(mut self, settings: &CacheSettings) -> Self {
        self.cache_prefix = settings.key_prefix.clone();
        self.cache_ttl = settings.ttl();
        self
    }

    pub fn cache_key(&self, alias: &str) -> String {
        format!("{}{}", self.cache_prefix, alias)
    }

    /// Active menu with this alias
    pub async fn get_menu(&self, alias: &str) -> Result<Option<Menu>, DomainError> {
        self.menus.find_active_by_alias(alias).await
    }

    /// Uncached, unfiltered pre-order sequence of the menu's active items
    pub async fn get_flat_tree(&self, alias: &str) -> Result<Forest, DomainError> {
        let Some(menu) = self.get_menu(alias).await? else {
            debug!("Menu '{}' not found or inactive", alias);
            return Ok(Vec::new());
        };

        let items = self.items.list_active_by_menu(&menu.id).await?;
        Ok(flatten(&items))
    }

    /// Viewer-filtered forest built from the cached unfiltered tree
    pub async fn get_tree(&self, alias: &str, viewer: Option<&Viewer>) -> Result<Forest, DomainError> {
        let shared = self.cached_forest(alias).await?;

        // Filtering rewrites child lists; it must only ever see a private copy.
        let copy: Forest = shared.as_ref().clone();
        Ok(self.rules.filter(copy, viewer))
    }

    async fn cached_forest(&self, alias: &str) -> Result<SharedForest, DomainError> {
        let key = self.cache_key(alias);

        match self.cache.get(&key).await {
            Ok(Some(forest)) => {
                debug!("Menu tree cache hit: {}", key);
                return Ok(forest);
            }
            Ok(None) => debug!("Menu tree cache miss: {}", key),
            Err(e) => warn!("Menu tree cache read failed for {}, rebuilding: {}", key, e),
        }

        let flat = self.get_flat_tree(alias).await?;
        let forest: SharedForest = Arc::new(assemble(&flat));

        if let Err(e) = self.cache.put(&key, Arc::clone(&forest), self.cache_ttl).await {
            warn!("Failed to cache menu tree {}: {}", key, e);
        } else {
            info!("Cached menu tree {} ({} nodes)", key, flat.len());
        }

        Ok(forest)
    }

    /// Breadcrumb trail for a URL. `None` never matches.
    pub async fn get_breadcrumbs(
        &self,
        alias: &str,
        url: Option<&str>,
        include_home: bool,
    ) -> Result<Vec<Breadcrumb>, DomainError> {
        let flat = self.get_flat_tree(alias).await?;
        if flat.is_empty() {
            return Ok(Vec::new());
        }

        let target = url.and_then(|url| breadcrumbs::find_by_url(&flat, url, self.rules.routes()));
        Ok(breadcrumbs::resolve(&flat, target, include_home))
    }

    /// Breadcrumb trail for a route name. `None` yields an empty trail.
    pub async fn get_breadcrumbs_by_route(
        &self,
        alias: &str,
        route_name: Option<&str>,
        include_home: bool,
    ) -> Result<Vec<Breadcrumb>, DomainError> {
        let Some(route_name) = route_name.filter(|name| !name.is_empty()) else {
            return Ok(Vec::new());
        };

        let flat = self.get_flat_tree(alias).await?;
        if flat.is_empty() {
            return Ok(Vec::new());
        }

        let target = breadcrumbs::find_by_route(&flat, route_name);
        Ok(breadcrumbs::resolve(&flat, target, include_home))
    }

    /// Evict the cached tree for `alias`. Failures are logged only.
    pub async fn clear_cache(&self, alias: &str) {
        let key = self.cache_key(alias);
        match self.cache.forget(&key).await {
            Ok(()) => debug!("Cleared menu tree cache: {}", key),
            Err(e) => warn!("Failed to clear menu tree cache {}: {}", key, e),
        }
    }
}

#[async_trait]
impl MenuMutationHook for MenuBuilder {
    async fn menu_changed(&self, alias: &str, kind: MutationKind) {
        debug!("Menu '{}' {}, evicting cached tree", alias, kind.as_str());
        self.clear_cache(alias).await;
    }
}
