// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Parent-referencing menu entry and its visibility type
// ============================================================================

use chrono::{DateTime, Utc};
use menu_shared::constants::{MAX_LINK_LENGTH, MAX_TITLE_LENGTH};
use menu_shared::MetaMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Menu item type enumeration. Drives per-viewer visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItemType {
    Url,
    Route,
    Permission,
    Feature,
    Divider,
}

impl MenuItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItemType::Url => "url",
            MenuItemType::Route => "route",
            MenuItemType::Permission => "permission",
            MenuItemType::Feature => "feature",
            MenuItemType::Divider => "divider",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "url" => Some(MenuItemType::Url),
            "route" => Some(MenuItemType::Route),
            "permission" => Some(MenuItemType::Permission),
            "feature" => Some(MenuItemType::Feature),
            "divider" => Some(MenuItemType::Divider),
            _ => None,
        }
    }

    /// Meta key holding the type-specific value, if the type has one
    pub fn meta_key(&self) -> Option<&'static str> {
        match self {
            MenuItemType::Route => Some("route"),
            MenuItemType::Permission => Some("permission"),
            MenuItemType::Feature => Some("feature"),
            MenuItemType::Url | MenuItemType::Divider => None,
        }
    }
}

/// Polymorphic link to an external entity that contributes to the item URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuableRef {
    pub entity_type: String,
    pub entity_id: String,
}

impl MenuableRef {
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

/// Menu Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,

    pub menuable: Option<MenuableRef>,
    pub menuable_value: Option<String>,

    #[validate(length(max = MAX_TITLE_LENGTH, message = "Menu item title too long"))]
    pub title: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH, message = "Menu item link too long"))]
    pub link: Option<String>,

    /// Raw type as persisted; unknown values are kept and hide the item
    #[serde(rename = "type")]
    pub item_type: String,

    pub is_active: bool,
    pub sort: i32,

    #[serde(default)]
    pub meta: MetaMap,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl MenuItem {
    pub fn new(
        menu_id: Uuid,
        parent_id: Option<Uuid>,
        title: Option<String>,
        link: Option<String>,
        item_type: MenuItemType,
        sort: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: menu_shared::new_id(),
            menu_id,
            parent_id,
            menuable: None,
            menuable_value: None,
            title: title.map(|t| t.trim().to_string()),
            link: link.map(|l| l.trim().to_string()),
            item_type: item_type.as_str().to_string(),
            is_active: true,
            sort,
            meta: MetaMap::new(),
            created_at: Utc::now(),
            modified_at: None,
            removed_at: None,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }

    pub fn with_menuable(mut self, menuable: MenuableRef) -> Self {
        self.menuable = Some(menuable);
        self
    }

    pub fn kind(&self) -> Option<MenuItemType> {
        MenuItemType::from_str(&self.item_type)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
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
}
