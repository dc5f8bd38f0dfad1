//! Common types

use uuid::Uuid;

pub type EntityId = Uuid;

/// Free-form JSON object stored alongside menus and menu items
pub type MetaMap = serde_json::Map<String, serde_json::Value>;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}
