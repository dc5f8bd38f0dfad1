//! Application-wide constants

pub const DEFAULT_MENU_TABLE: &str = "menus";
pub const DEFAULT_MENU_ITEM_TABLE: &str = "menu_items";
pub const DEFAULT_CACHE_KEY_PREFIX: &str = "menu:tree:";
pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 360;
pub const MAX_ALIAS_LENGTH: u64 = 100;
pub const MAX_TITLE_LENGTH: u64 = 255;
pub const MAX_LINK_LENGTH: u64 = 255;
pub const PATH_SEPARATOR: char = '.';
