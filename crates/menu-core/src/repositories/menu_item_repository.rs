//! Menu item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::MenuItem;
use crate::error::DomainError;

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Active, non-removed items of a menu ordered by `sort`, then insertion order
    async fn list_active_by_menu(&self, menu_id: &Uuid) -> Result<Vec<MenuItem>, DomainError>;
    /// Item by id, including inactive and removed items
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    /// Direct children of an item, including inactive and removed ones
    async fn list_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
}
