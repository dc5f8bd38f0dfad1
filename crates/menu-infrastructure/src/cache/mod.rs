//! Tree cache adapters

pub mod memory;
pub mod redis;

pub use memory::MemoryTreeCache;
pub use self::redis::{create_redis_pool, RedisTreeCache};
