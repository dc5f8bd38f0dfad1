// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};
use uuid::Uuid;

use menu_core::domain::{MenuItem, MenuableRef};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_shared::constants::DEFAULT_MENU_ITEM_TABLE;
use menu_shared::MetaMap;

use super::{database_error, is_foreign_key_violation};

const ITEM_COLUMNS: &str = r#"id, menu_id, parent_id, menuable_type, menuable_id, menuable_value,
    title, link, "type", is_active, sort, meta, created_at, modified_at, removed_at"#;

pub struct PgMenuItemRepository {
    pool: PgPool,
    table: String,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_table(pool, DEFAULT_MENU_ITEM_TABLE)
    }

    pub fn with_table(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    fn map_write_error(&self, item: &MenuItem, context: &str, e: sqlx::Error) -> DomainError {
        if is_foreign_key_violation(&e) {
            error!("Menu item {} references a missing row: {}", item.id, e);
            match item.parent_id {
                Some(parent_id) => DomainError::ParentNotInMenu {
                    parent_id,
                    menu_id: item.menu_id,
                },
                None => DomainError::MenuNotFoundById(item.menu_id),
            }
        } else {
            database_error(context, e)
        }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub menuable_type: Option<String>,
    pub menuable_id: Option<String>,
    pub menuable_value: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub is_active: bool,
    pub sort: i32,
    pub meta: Option<Json<MetaMap>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        let menuable = match (row.menuable_type, row.menuable_id) {
            (Some(entity_type), Some(entity_id)) => Some(MenuableRef::new(entity_type, entity_id)),
            _ => None,
        };

        MenuItem {
            id: row.id,
            menu_id: row.menu_id,
            parent_id: row.parent_id,
            menuable,
            menuable_value: row.menuable_value,
            title: row.title,
            link: row.link,
            item_type: row.item_type,
            is_active: row.is_active,
            sort: row.sort,
            meta: row.meta.map(|m| m.0).unwrap_or_default(),
            created_at: row.created_at,
            modified_at: row.modified_at,
            removed_at: row.removed_at,
        }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list_active_by_menu(&self, menu_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        let sql = format!(
            r#"
            SELECT {}
            FROM {}
            WHERE menu_id = $1 AND is_active AND removed_at IS NULL
            ORDER BY sort, created_at, id
            "#,
            ITEM_COLUMNS, self.table
        );

        let rows: Vec<MenuItemRow> = sqlx::query_as(&sql)
            .bind(menu_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("listing menu items", e))?;

        debug!("Loaded {} active items for menu {}", rows.len(), menu_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", ITEM_COLUMNS, self.table);

        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("finding menu item by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn list_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE parent_id = $1 ORDER BY sort, created_at, id",
            ITEM_COLUMNS, self.table
        );

        let rows: Vec<MenuItemRow> = sqlx::query_as(&sql)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("listing menu item children", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item {} in menu {}", item.id, item.menu_id);

        let sql = format!(
            r#"
            INSERT INTO {} ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {}
            "#,
            self.table, ITEM_COLUMNS, ITEM_COLUMNS
        );

        let row: MenuItemRow = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(item.menu_id)
            .bind(item.parent_id)
            .bind(item.menuable.as_ref().map(|m| m.entity_type.as_str()))
            .bind(item.menuable.as_ref().map(|m| m.entity_id.as_str()))
            .bind(&item.menuable_value)
            .bind(&item.title)
            .bind(&item.link)
            .bind(&item.item_type)
            .bind(item.is_active)
            .bind(item.sort)
            .bind(Json(&item.meta))
            .bind(item.created_at)
            .bind(item.modified_at)
            .bind(item.removed_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.map_write_error(item, "creating menu item", e))?;

        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET
                menu_id = $2,
                parent_id = $3,
                menuable_type = $4,
                menuable_id = $5,
                menuable_value = $6,
                title = $7,
                link = $8,
                "type" = $9,
                is_active = $10,
                sort = $11,
                meta = $12,
                modified_at = $13,
                removed_at = $14
            WHERE id = $1
            RETURNING {}
            "#,
            self.table, ITEM_COLUMNS
        );

        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(item.menu_id)
            .bind(item.parent_id)
            .bind(item.menuable.as_ref().map(|m| m.entity_type.as_str()))
            .bind(item.menuable.as_ref().map(|m| m.entity_id.as_str()))
            .bind(&item.menuable_value)
            .bind(&item.title)
            .bind(&item.link)
            .bind(&item.item_type)
            .bind(item.is_active)
            .bind(item.sort)
            .bind(Json(&item.meta))
            .bind(item.modified_at)
            .bind(item.removed_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.map_write_error(item, "updating menu item", e))?;

        row.map(Into::into)
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }
}
