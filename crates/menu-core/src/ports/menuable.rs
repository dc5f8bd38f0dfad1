//! Menuable entity lookup (port)

use async_trait::async_trait;

use crate::domain::MenuableRef;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuableResolver: Send + Sync {
    /// String identifier of the referenced entity, `None` when it no longer exists
    async fn identifier(&self, menuable: &MenuableRef) -> Result<Option<String>, DomainError>;
}
