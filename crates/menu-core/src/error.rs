//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFoundById(Uuid),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(Uuid),

    #[error("Menu alias already exists: {0}")]
    MenuAliasAlreadyExists(String),

    #[error("Parent item {parent_id} does not belong to menu {menu_id}")]
    ParentNotInMenu { parent_id: Uuid, menu_id: Uuid },

    #[error("Menu item {0} cannot be its own parent")]
    SelfParent(Uuid),

    #[error("Moving menu item {0} under its own descendant")]
    ParentCycle(Uuid),

    #[error("Route not resolvable: {0}")]
    RouteNotResolvable(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
