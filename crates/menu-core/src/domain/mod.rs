//! # Menu Core - Domain Module
//! 
//! Menu entities and the derived tree node types.

pub mod menu;
pub mod menu_item;
pub mod node;
pub mod viewer;

// Re-export all entities and enums
pub use menu::Menu;
pub use menu_item::{MenuItem, MenuItemType, MenuableRef};
pub use node::{Breadcrumb, Forest, MenuNode, SharedForest};
pub use viewer::Viewer;
