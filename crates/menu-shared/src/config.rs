//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CACHE_KEY_PREFIX, DEFAULT_CACHE_TTL_MINUTES, DEFAULT_MENU_ITEM_TABLE,
    DEFAULT_MENU_TABLE,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub menu: MenuSettings,
    pub cache: CacheSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub max_connections: u32,
}

/// Table names for the menu rows
#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    pub table: String,
    pub item_table: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            table: DEFAULT_MENU_TABLE.to_string(),
            item_table: DEFAULT_MENU_ITEM_TABLE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheStore {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub key_prefix: String,
    pub ttl_minutes: u64,
    pub store: CacheStore,
}

impl CacheSettings {
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_minutes.saturating_mul(60))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_CACHE_KEY_PREFIX.to_string(),
            ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
            store: CacheStore::Memory,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
    pub json: bool,
    pub directory: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: true,
            directory: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        tracing::debug!("Loading configuration for environment: {}", env);
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Built-in defaults only, without files or environment
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "menu-builder")?
            .set_default("database.url", "postgres://localhost/menu_builder")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("redis.url", "redis://127.0.0.1:6379")?
            .set_default("redis.max_connections", 16)?
            .set_default("menu.table", DEFAULT_MENU_TABLE)?
            .set_default("menu.item_table", DEFAULT_MENU_ITEM_TABLE)?
            .set_default("cache.key_prefix", DEFAULT_CACHE_KEY_PREFIX)?
            .set_default("cache.ttl_minutes", DEFAULT_CACHE_TTL_MINUTES)?
            .set_default("cache.store", "memory")?
            .set_default("log.filter", "info")?
            .set_default("log.json", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::defaults().unwrap();

        assert_eq!(config.menu.table, "menus");
        assert_eq!(config.menu.item_table, "menu_items");
        assert_eq!(config.cache.key_prefix, "menu:tree:");
        assert_eq!(config.cache.ttl_minutes, 360);
        assert_eq!(config.cache.store, CacheStore::Memory);
        assert!(config.log.directory.is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("cache.store", "redis")
            .unwrap()
            .set_override("cache.ttl_minutes", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.cache.store, CacheStore::Redis);
        assert_eq!(config.cache.ttl(), std::time::Duration::from_secs(300));
    }
}
