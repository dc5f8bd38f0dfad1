//! Annotated tree nodes and breadcrumb entries

use std::sync::Arc;

use chrono::{DateTime, Utc};
use menu_shared::{utils::compose_url, MetaMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::menu_item::{MenuItem, MenuItemType, MenuableRef};

/// Ordered root-level nodes with nested children
pub type Forest = Vec<MenuNode>;

/// Unfiltered forest as held by a tree cache
pub type SharedForest = Arc<Forest>;

/// A menu item annotated with its position in the tree.
///
/// `children` is only populated by the assembler; flat sequences carry
/// empty child lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub menuable: Option<MenuableRef>,
    pub menuable_value: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub is_active: bool,
    pub sort: i32,
    #[serde(default)]
    pub meta: MetaMap,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,

    pub depth: usize,
    pub path: String,
    pub url: String,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn from_item(item: &MenuItem, depth: usize, path: String) -> Self {
        Self {
            id: item.id,
            menu_id: item.menu_id,
            parent_id: item.parent_id,
            menuable: item.menuable.clone(),
            menuable_value: item.menuable_value.clone(),
            title: item.title.clone(),
            link: item.link.clone(),
            item_type: item.item_type.clone(),
            is_active: item.is_active,
            sort: item.sort,
            meta: item.meta.clone(),
            created_at: item.created_at,
            modified_at: item.modified_at,
            depth,
            path,
            url: compose_url(item.link.as_deref(), item.menuable_value.as_deref()),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> Option<MenuItemType> {
        MenuItemType::from_str(&self.item_type)
    }

    /// String value of a meta key; empty strings count as absent
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Ids on the path from the root down to this node
    pub fn path_ids(&self) -> Vec<Uuid> {
        self.path
            .split(menu_shared::constants::PATH_SEPARATOR)
            .filter_map(|segment| Uuid::parse_str(segment).ok())
            .collect()
    }

    /// Number of nodes in this subtree, self included
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuNode::subtree_len).sum::<usize>()
    }
}

/// Breadcrumb entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub id: Uuid,
    pub title: Option<String>,
    pub url: String,
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub depth: usize,
    pub meta: MetaMap,
}

impl From<&MenuNode> for Breadcrumb {
    fn from(node: &MenuNode) -> Self {
        Self {
            id: node.id,
            title: node.title.clone(),
            url: node.url.clone(),
            link: node.link.clone(),
            item_type: node.item_type.clone(),
            depth: node.depth,
            meta: node.meta.clone(),
        }
    }
}
