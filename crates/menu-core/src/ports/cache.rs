//! Tree cache port

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::SharedForest;
use crate::error::DomainError;

/// Key-value store for unfiltered forests, keyed by `<prefix><alias>`.
///
/// Readers must never mutate a returned forest; callers clone before
/// filtering.
#[async_trait]
pub trait TreeCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<SharedForest>, DomainError>;
    async fn put(&self, key: &str, forest: SharedForest, ttl: Duration) -> Result<(), DomainError>;
    async fn forget(&self, key: &str) -> Result<(), DomainError>;
}
