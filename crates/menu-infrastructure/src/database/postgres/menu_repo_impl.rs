// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use menu_core::domain::Menu;
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;
use menu_shared::constants::DEFAULT_MENU_TABLE;
use menu_shared::MetaMap;

use super::{database_error, is_unique_violation};

const MENU_COLUMNS: &str = "id, title, description, alias, is_active, meta, created_at, modified_at, removed_at";

pub struct PgMenuRepository {
    pool: PgPool,
    table: String,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_table(pool, DEFAULT_MENU_TABLE)
    }

    pub fn with_table(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    async fn find_one(&self, filter: &str, bind: &str) -> Result<Option<Menu>, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE {}", MENU_COLUMNS, self.table, filter);

        let row: Option<MenuRow> = sqlx::query_as(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("finding menu by alias", e))?;

        Ok(row.map(Into::into))
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub alias: String,
    pub is_active: bool,
    pub meta: Option<Json<MetaMap>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            title: row.title,
            description: row.description,
            alias: row.alias,
            is_active: row.is_active,
            meta: row.meta.map(|m| m.0),
            created_at: row.created_at,
            modified_at: row.modified_at,
            removed_at: row.removed_at,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_active_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError> {
        self.find_one("alias = $1 AND is_active AND removed_at IS NULL", alias)
            .await
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Menu>, DomainError> {
        self.find_one("alias = $1 AND removed_at IS NULL", alias).await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", MENU_COLUMNS, self.table);

        let row: Option<MenuRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("finding menu by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        info!("Creating menu: {}", menu.alias);

        let sql = format!(
            r#"
            INSERT INTO {} ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            self.table, MENU_COLUMNS, MENU_COLUMNS
        );

        let row: MenuRow = sqlx::query_as(&sql)
            .bind(menu.id)
            .bind(&menu.title)
            .bind(&menu.description)
            .bind(&menu.alias)
            .bind(menu.is_active)
            .bind(menu.meta.as_ref().map(Json))
            .bind(menu.created_at)
            .bind(menu.modified_at)
            .bind(menu.removed_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::MenuAliasAlreadyExists(menu.alias.clone())
                } else {
                    database_error("creating menu", e)
                }
            })?;

        info!("Menu created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET
                title = $2,
                description = $3,
                alias = $4,
                is_active = $5,
                meta = $6,
                modified_at = $7,
                removed_at = $8
            WHERE id = $1
            RETURNING {}
            "#,
            self.table, MENU_COLUMNS
        );

        let row: Option<MenuRow> = sqlx::query_as(&sql)
            .bind(menu.id)
            .bind(&menu.title)
            .bind(&menu.description)
            .bind(&menu.alias)
            .bind(menu.is_active)
            .bind(menu.meta.as_ref().map(Json))
            .bind(menu.modified_at)
            .bind(menu.removed_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::MenuAliasAlreadyExists(menu.alias.clone())
                } else {
                    database_error("updating menu", e)
                }
            })?;

        row.map(Into::into).ok_or_else(|| {
            error!("Menu vanished during update: {}", menu.id);
            DomainError::MenuNotFoundById(menu.id)
        })
    }
}
