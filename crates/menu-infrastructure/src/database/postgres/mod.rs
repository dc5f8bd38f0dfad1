//! PostgreSQL repository implementations

pub mod menu_repo_impl;
pub mod menu_item_repo_impl;

pub use menu_repo_impl::PgMenuRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;

/// Map a sqlx error, logging it under `context`
pub(crate) fn database_error(context: &str, e: sqlx::Error) -> menu_core::DomainError {
    tracing::error!("Database error {}: {}", context, e);
    menu_core::DomainError::DatabaseError(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db| db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db| db.is_foreign_key_violation())
}
