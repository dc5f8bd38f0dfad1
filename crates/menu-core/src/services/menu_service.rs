// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Menu and menu item writes with referential checks, menuable link
//! derivation, and post-mutation hooks

use std::collections::HashSet;
use std::sync::Arc;

use menu_shared::utils::{append_identifier, replace_identifier};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Menu, MenuItem};
use crate::error::DomainError;
use crate::ports::{MenuMutationHook, MenuableResolver, MutationKind};
use crate::repositories::{MenuItemRepository, MenuRepository};

/// Write side of the menu store
pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
    items: Arc<dyn MenuItemRepository>,
    menuables: Option<Arc<dyn MenuableResolver>>,
    hooks: Vec<Arc<dyn MenuMutationHook>>,
}

impl MenuService {
    pub fn new(menus: Arc<dyn MenuRepository>, items: Arc<dyn MenuItemRepository>) -> Self {
        Self {
            menus,
            items,
            menuables: None,
            hooks: Vec::new(),
        }
    }

    pub fn with_menuable_resolver(mut self, resolver: Arc<dyn MenuableResolver>) -> Self {
        self.menuables = Some(resolver);
        self
    }

    /// Hooks run in registration order after every successful write.
    pub fn register_hook(&mut self, hook: Arc<dyn MenuMutationHook>) {
        self.hooks.push(hook);
    }

    // ------------------------------------------------------------------
    // Menus
    // ------------------------------------------------------------------

    pub async fn create_menu(&self, menu: Menu) -> Result<Menu, DomainError> {
        info!("Creating menu '{}'", menu.alias);

        menu.validate()?;
        self.ensure_alias_free(&menu.alias, &menu.id).await?;

        let created = self.menus.create(&menu).await?;
        self.notify(&created.alias, MutationKind::Created).await;

        info!("Menu '{}' created: {}", created.alias, created.id);
        Ok(created)
    }

    pub async fn update_menu(&self, mut menu: Menu) -> Result<Menu, DomainError> {
        info!("Updating menu {}", menu.id);

        // 1. Load the stored version
        let existing = self
            .menus
            .find_by_id(&menu.id)
            .await?
            .ok_or(DomainError::MenuNotFoundById(menu.id))?;

        // 2. Validate and keep aliases unique
        menu.validate()?;
        if menu.alias != existing.alias {
            self.ensure_alias_free(&menu.alias, &menu.id).await?;
        }

        // 3. Persist
        menu.touch();
        let updated = self.menus.update(&menu).await?;

        // 4. Both aliases may have a cached tree
        if existing.alias != updated.alias {
            self.notify(&existing.alias, MutationKind::Updated).await;
        }
        self.notify(&updated.alias, MutationKind::Updated).await;

        Ok(updated)
    }

    /// Soft delete. Deleting a removed menu is a no-op.
    pub async fn delete_menu(&self, id: &Uuid) -> Result<Menu, DomainError> {
        let mut menu = self
            .menus
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuNotFoundById(*id))?;

        if menu.is_deleted() {
            debug!("Menu {} already removed", id);
            return Ok(menu);
        }

        menu.soft_delete();
        let deleted = self.menus.update(&menu).await?;
        self.notify(&deleted.alias, MutationKind::Deleted).await;

        info!("Menu '{}' removed", deleted.alias);
        Ok(deleted)
    }

    pub async fn restore_menu(&self, id: &Uuid) -> Result<Menu, DomainError> {
        let mut menu = self
            .menus
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuNotFoundById(*id))?;

        if !menu.is_deleted() {
            return Ok(menu);
        }

        // Another live menu may have taken the alias meanwhile
        self.ensure_alias_free(&menu.alias, &menu.id).await?;

        menu.restore();
        let restored = self.menus.update(&menu).await?;
        self.notify(&restored.alias, MutationKind::Restored).await;

        info!("Menu '{}' restored", restored.alias);
        Ok(restored)
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub async fn create_item(&self, mut item: MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item {} in menu {}", item.id, item.menu_id);

        // 1. Owning menu must exist
        let menu = self.owning_menu(&item.menu_id).await?;

        // 2. Parent must live in the same menu
        self.check_parent(&item, false).await?;

        // 3. Derive the link from the referenced entity
        if let Some(identifier) = self.menuable_identifier(&item).await {
            item.link = Some(append_identifier(item.link.as_deref(), &identifier));
        }

        item.validate()?;
        let created = self.items.create(&item).await?;
        self.notify(&menu.alias, MutationKind::Created).await;

        Ok(created)
    }

    pub async fn update_item(&self, mut item: MenuItem) -> Result<MenuItem, DomainError> {
        info!("Updating menu item {}", item.id);

        // 1. Load the stored version and the (possibly new) owning menu
        let existing = self
            .items
            .find_by_id(&item.id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(item.id))?;
        let menu = self.owning_menu(&item.menu_id).await?;

        // 2. A new placement needs a live parent in the same menu, not below the item
        let menu_changed = existing.menu_id != item.menu_id;
        if menu_changed || existing.parent_id != item.parent_id {
            self.check_parent(&item, true).await?;
        }

        // 3. Re-derive the link
        if let Some(identifier) = self.menuable_identifier(&item).await {
            item.link = Some(replace_identifier(item.link.as_deref(), &identifier));
        }

        // 4. Persist
        item.validate()?;
        item.touch();
        let updated = self.items.update(&item).await?;

        // 5. Descendants follow the item; both trees are invalidated
        if menu_changed {
            self.move_descendants(&updated).await?;
            self.notify_owner(&existing.menu_id, MutationKind::Updated).await?;
        }
        self.notify(&menu.alias, MutationKind::Updated).await;

        Ok(updated)
    }

    /// Soft delete. Descendants stay stored but drop out of the tree.
    pub async fn delete_item(&self, id: &Uuid) -> Result<MenuItem, DomainError> {
        let mut item = self
            .items
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(*id))?;

        if item.is_deleted() {
            debug!("Menu item {} already removed", id);
            return Ok(item);
        }

        item.soft_delete();
        let deleted = self.items.update(&item).await?;
        self.notify_owner(&deleted.menu_id, MutationKind::Deleted).await?;

        info!("Menu item {} removed", id);
        Ok(deleted)
    }

    pub async fn restore_item(&self, id: &Uuid) -> Result<MenuItem, DomainError> {
        let mut item = self
            .items
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(*id))?;

        if !item.is_deleted() {
            return Ok(item);
        }

        item.restore();
        let restored = self.items.update(&item).await?;
        self.notify_owner(&restored.menu_id, MutationKind::Restored).await?;

        info!("Menu item {} restored", id);
        Ok(restored)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    async fn ensure_alias_free(&self, alias: &str, own_id: &Uuid) -> Result<(), DomainError> {
        match self.menus.find_by_alias(alias).await? {
            Some(other) if other.id != *own_id => {
                warn!("Menu alias already taken: {}", alias);
                Err(DomainError::MenuAliasAlreadyExists(alias.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn owning_menu(&self, menu_id: &Uuid) -> Result<Menu, DomainError> {
        self.menus
            .find_by_id(menu_id)
            .await?
            .ok_or(DomainError::MenuNotFoundById(*menu_id))
    }

    async fn check_parent(&self, item: &MenuItem, walk_ancestors: bool) -> Result<(), DomainError> {
        let Some(parent_id) = item.parent_id else {
            return Ok(());
        };
        if parent_id == item.id {
            return Err(DomainError::SelfParent(item.id));
        }

        let parent = self
            .items
            .find_by_id(&parent_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(DomainError::MenuItemNotFound(parent_id))?;
        if parent.menu_id != item.menu_id {
            return Err(DomainError::ParentNotInMenu {
                parent_id,
                menu_id: item.menu_id,
            });
        }

        if walk_ancestors {
            let mut seen = HashSet::from([parent.id]);
            let mut next = parent.parent_id;
            while let Some(ancestor_id) = next {
                if ancestor_id == item.id {
                    return Err(DomainError::ParentCycle(item.id));
                }
                // stored data may already contain a loop
                if !seen.insert(ancestor_id) {
                    break;
                }
                next = self
                    .items
                    .find_by_id(&ancestor_id)
                    .await?
                    .and_then(|ancestor| ancestor.parent_id);
            }
        }

        Ok(())
    }

    /// Re-home every stored descendant of `item` into `item.menu_id`
    async fn move_descendants(&self, item: &MenuItem) -> Result<(), DomainError> {
        let mut seen = HashSet::from([item.id]);
        let mut pending = vec![item.id];
        let mut moved = 0usize;

        while let Some(parent_id) = pending.pop() {
            for mut child in self.items.list_children(&parent_id).await? {
                if !seen.insert(child.id) {
                    continue;
                }
                pending.push(child.id);
                if child.menu_id == item.menu_id {
                    continue;
                }
                child.menu_id = item.menu_id;
                child.touch();
                self.items.update(&child).await?;
                moved += 1;
            }
        }

        if moved > 0 {
            info!("Moved {} descendants of item {} to menu {}", moved, item.id, item.menu_id);
        }
        Ok(())
    }

    async fn menuable_identifier(&self, item: &MenuItem) -> Option<String> {
        let (Some(resolver), Some(menuable)) = (&self.menuables, &item.menuable) else {
            return None;
        };

        match resolver.identifier(menuable).await {
            Ok(Some(identifier)) => Some(identifier),
            Ok(None) => {
                debug!(
                    "Menuable {}:{} not found, keeping link",
                    menuable.entity_type, menuable.entity_id
                );
                None
            }
            Err(e) => {
                warn!(
                    "Failed to resolve menuable {}:{}: {}",
                    menuable.entity_type, menuable.entity_id, e
                );
                None
            }
        }
    }

    async fn notify_owner(&self, menu_id: &Uuid, kind: MutationKind) -> Result<(), DomainError> {
        match self.menus.find_by_id(menu_id).await? {
            Some(menu) => self.notify(&menu.alias, kind).await,
            None => debug!("Owning menu {} is gone, nothing to notify", menu_id),
        }
        Ok(())
    }

    async fn notify(&self, alias: &str, kind: MutationKind) {
        for hook in &self.hooks {
            hook.menu_changed(alias, kind).await;
        }
    }
}
