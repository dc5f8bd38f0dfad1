//! # Menu Infrastructure
//! 
//! Row store and tree cache implementations (adapters).

pub mod bootstrap;
pub mod cache;
pub mod database;

pub use bootstrap::{build_repositories, build_tree_cache};
pub use cache::{create_redis_pool, MemoryTreeCache, RedisTreeCache};
pub use database::{create_pool, PgMenuItemRepository, PgMenuRepository};
