// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Named menu addressed by its alias
// ============================================================================

use chrono::{DateTime, Utc};
use menu_shared::constants::MAX_ALIAS_LENGTH;
use menu_shared::MetaMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: Uuid,

    /// Localized title, usually an object keyed by locale
    pub title: Option<Value>,
    pub description: Option<Value>,

    #[validate(length(min = 1, max = MAX_ALIAS_LENGTH, message = "Menu alias must be between 1 and 100 characters"))]
    pub alias: String,

    pub is_active: bool,
    pub meta: Option<MetaMap>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl Menu {
    pub fn new(alias: String, title: Option<Value>) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id: menu_shared::new_id(),
            title,
            description: None,
            alias: alias.trim().to_string(),
            is_active: true,
            meta: None,
            created_at: Utc::now(),
            modified_at: None,
            removed_at: None,
        };

        menu.validate()?;
        Ok(menu)
    }

    pub fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }

    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.removed_at = Some(now);
        self.modified_at = Some(now);
    }

    pub fn restore(&mut self) {
        self.removed_at = None;
        self.modified_at = Some(Utc::now());
    }

    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }

    /// Served by the tree engine only while active and not removed
    pub fn is_servable(&self) -> bool {
        self.is_active && !self.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_menu() {
        let menu = Menu::new(" main ".to_string(), Some(json!({"en": "Main"}))).unwrap();
        assert_eq!(menu.alias, "main");
        assert!(menu.is_active);
        assert!(menu.meta.is_none());
        assert!(menu.is_servable());
    }

    #[test]
    fn test_alias_is_required() {
        assert!(Menu::new("   ".to_string(), None).is_err());
        let limit = MAX_ALIAS_LENGTH as usize;
        assert!(Menu::new("x".repeat(limit), None).is_ok());
        assert!(Menu::new("x".repeat(limit + 1), None).is_err());
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let mut menu = Menu::new("main".to_string(), None).unwrap();
        menu.soft_delete();
        assert!(menu.is_deleted());
        assert!(!menu.is_servable());

        menu.restore();
        assert!(!menu.is_deleted());
        assert!(menu.modified_at.is_some());
    }
}
