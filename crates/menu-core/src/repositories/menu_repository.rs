//! Menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Menu;
use crate::error::DomainError;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Active, non-removed menu with this alias
    async fn find_active_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError>;
    /// Any non-removed menu with this alias, active or not
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError>;
    /// Menu by id, including inactive and removed menus
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError>;
    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError>;
    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError>;
}
