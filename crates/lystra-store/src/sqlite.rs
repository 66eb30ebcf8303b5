//! SQLite-backed list storage via sqlx.
//!
//! Two tables, bootstrapped at connect time:
//!
//! ```sql
//! CREATE TABLE lists (id INTEGER PRIMARY KEY AUTOINCREMENT);
//! CREATE TABLE items (
//!     id      INTEGER PRIMARY KEY AUTOINCREMENT,
//!     list_id INTEGER NOT NULL REFERENCES lists(id),
//!     text    TEXT NOT NULL
//! );
//! ```
//!
//! Foreign keys are enabled on every connection, so "item belongs to an
//! existing list" is enforced atomically at insert. Creation order is
//! rowid order.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use lystra_core::{Error, Item, ItemId, List, ListId, Result};

use crate::traits::ListStore;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT
);
CREATE TABLE IF NOT EXISTS items (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id INTEGER NOT NULL REFERENCES lists(id),
    text    TEXT NOT NULL
);
";

/// SQLite list repository.
///
/// Cheap to clone (the pool is reference-counted).
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at the given sqlx URL,
    /// e.g. `sqlite:lystra.db`, and bootstrap the schema.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Open an in-memory database.
    ///
    /// The pool is pinned to a single connection; an in-memory SQLite
    /// database lives and dies with its connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    async fn list_exists(&self, list_id: ListId) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM lists WHERE id = ?1")
            .bind(list_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl ListStore for SqliteStore {
    async fn create_list(&self) -> Result<ListId> {
        let result = sqlx::query("INSERT INTO lists DEFAULT VALUES")
            .execute(&self.pool)
            .await?;
        let id = ListId::new(result.last_insert_rowid());
        tracing::debug!(list_id = %id, "created list");
        Ok(id)
    }

    async fn create_item(&self, list_id: ListId, text: &str) -> Result<ItemId> {
        // Checked up front so an unknown list surfaces as NotFound
        // rather than a foreign-key violation.
        if !self.list_exists(list_id).await? {
            return Err(Error::list_not_found(list_id));
        }
        let result = sqlx::query("INSERT INTO items (list_id, text) VALUES (?1, ?2)")
            .bind(list_id.as_i64())
            .bind(text)
            .execute(&self.pool)
            .await?;
        let id = ItemId::new(result.last_insert_rowid());
        tracing::debug!(list_id = %list_id, item_id = %id, "created item");
        Ok(id)
    }

    async fn get_list(&self, list_id: ListId) -> Result<List> {
        if self.list_exists(list_id).await? {
            Ok(List { id: list_id })
        } else {
            Err(Error::list_not_found(list_id))
        }
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>> {
        if !self.list_exists(list_id).await? {
            return Err(Error::list_not_found(list_id));
        }
        let rows = sqlx::query("SELECT id, list_id, text FROM items WHERE list_id = ?1 ORDER BY id")
            .bind(list_id.as_i64())
            .fetch_all(&self.pool)
            .await?;
        let items = rows
            .into_iter()
            .map(|row| {
                Ok(Item {
                    id: ItemId::new(row.try_get("id")?),
                    list_id: ListId::new(row.try_get("list_id")?),
                    text: row.try_get("text")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(items)
    }
}
