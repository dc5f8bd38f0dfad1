//! In-memory collaborators for engine tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Menu, MenuItem, MenuItemType, SharedForest, Viewer};
use crate::error::DomainError;
use crate::ports::{PermissionChecker, RouteResolver, TreeCache};
use crate::repositories::{MenuItemRepository, MenuRepository};

pub fn item(menu_id: Uuid, parent_id: Option<Uuid>, title: &str, link: &str, sort: i32) -> MenuItem {
    MenuItem::new(
        menu_id,
        parent_id,
        Some(title.to_string()),
        Some(link.to_string()),
        MenuItemType::Url,
        sort,
    )
    .unwrap()
}

pub fn gated(item: MenuItem, permission: &str) -> MenuItem {
    let mut item = item.with_meta("permission", permission);
    item.item_type = MenuItemType::Permission.as_str().to_string();
    item
}

pub fn routed(item: MenuItem, route: &str) -> MenuItem {
    let mut item = item.with_meta("route", route);
    item.item_type = MenuItemType::Route.as_str().to_string();
    item
}

/// Grants the same permission set to every viewer
pub struct GrantedPermissions(HashSet<String>);

impl GrantedPermissions {
    pub fn new(permissions: &[&str]) -> Self {
        Self(permissions.iter().map(|p| p.to_string()).collect())
    }
}

impl PermissionChecker for GrantedPermissions {
    fn can(&self, _viewer: &Viewer, permission: &str) -> Result<bool, DomainError> {
        Ok(self.0.contains(permission))
    }
}

/// Per-viewer permission sets
#[derive(Default)]
pub struct ViewerPermissions(HashMap<Uuid, HashSet<String>>);

impl ViewerPermissions {
    pub fn grant(mut self, viewer: &Viewer, permissions: &[&str]) -> Self {
        self.0
            .entry(viewer.id)
            .or_default()
            .extend(permissions.iter().map(|p| p.to_string()));
        self
    }
}

impl PermissionChecker for ViewerPermissions {
    fn can(&self, viewer: &Viewer, permission: &str) -> Result<bool, DomainError> {
        Ok(self
            .0
            .get(&viewer.id)
            .is_some_and(|granted| granted.contains(permission)))
    }
}

pub struct KnownRoutes(HashMap<String, String>);

impl KnownRoutes {
    pub fn new(routes: &[(&str, &str)]) -> Self {
        Self(
            routes
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        )
    }
}

impl RouteResolver for KnownRoutes {
    fn exists(&self, route_name: &str) -> bool {
        self.0.contains_key(route_name)
    }

    fn url_for(&self, route_name: &str) -> Result<String, DomainError> {
        self.0
            .get(route_name)
            .cloned()
            .ok_or_else(|| DomainError::RouteNotResolvable(route_name.to_string()))
    }
}

/// Row store backed by vectors, keeping insertion order
#[derive(Default)]
pub struct InMemoryStore {
    menus: Mutex<Vec<Menu>>,
    items: Mutex<Vec<MenuItem>>,
    pub item_reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_menu(self, menu: Menu) -> Self {
        self.menus.lock().unwrap().push(menu);
        self
    }

    pub fn with_items(self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items.lock().unwrap().extend(items);
        self
    }

    pub fn item_reads(&self) -> usize {
        self.item_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuRepository for InMemoryStore {
    async fn find_active_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError> {
        Ok(self
            .menus
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.alias == alias && m.is_servable())
            .cloned())
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError> {
        Ok(self
            .menus
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.alias == alias && !m.is_deleted())
            .cloned())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        Ok(self.menus.lock().unwrap().iter().find(|m| m.id == *id).cloned())
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        self.menus.lock().unwrap().push(menu.clone());
        Ok(menu.clone())
    }

    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let mut menus = self.menus.lock().unwrap();
        let slot = menus
            .iter_mut()
            .find(|m| m.id == menu.id)
            .ok_or(DomainError::MenuNotFoundById(menu.id))?;
        *slot = menu.clone();
        Ok(menu.clone())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryStore {
    async fn list_active_by_menu(&self, menu_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        self.item_reads.fetch_add(1, Ordering::SeqCst);
        let mut items: Vec<MenuItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.menu_id == *menu_id && i.is_active && !i.is_deleted())
            .cloned()
            .collect();
        items.sort_by_key(|i| i.sort);
        Ok(items)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == *id).cloned())
    }

    async fn list_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.parent_id == Some(*parent_id))
            .cloned()
            .collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(DomainError::MenuItemNotFound(item.id))?;
        *slot = item.clone();
        Ok(item.clone())
    }
}

/// Tree cache without expiry that records the TTL it was given
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, SharedForest>>,
    pub last_ttl: Mutex<Option<Duration>>,
    pub fail_reads: bool,
}

impl RecordingCache {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn stored(&self, key: &str) -> Option<SharedForest> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn seed(&self, key: &str, forest: SharedForest) {
        self.entries.lock().unwrap().insert(key.to_string(), forest);
    }
}

#[async_trait]
impl TreeCache for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<SharedForest>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::CacheError("connection refused".to_string()));
        }
        Ok(self.stored(key))
    }

    async fn put(&self, key: &str, forest: SharedForest, ttl: Duration) -> Result<(), DomainError> {
        *self.last_ttl.lock().unwrap() = Some(ttl);
        self.seed(key, forest);
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), DomainError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
