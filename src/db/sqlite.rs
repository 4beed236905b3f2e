use crate::config::CONFIG;
use crate::db::models::{Category, now_millis};
use crate::db::schema::{SEED_CATEGORIES, SQLITE_DROP, SQLITE_INIT};
use crate::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{info, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Long-lived handle to the inventory store. Cheap to clone (shares the
/// underlying pool); construct one at process start and pass it around.
#[derive(Clone)]
pub struct InventoryStorage {
    pool: SqlitePool,
}

impl InventoryStorage {
    /// Open (creating if absent) the store at `database_url` and make sure
    /// the schema exists. Foreign-key enforcement is switched on for every
    /// pooled connection; SQLite does not enable it by default and the
    /// cascade on category deletion depends on it.
    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self { pool };
        storage.init_schema().await?;
        info!(database_url, "inventory store opened");
        Ok(storage)
    }

    /// Open against the configured `database_url`.
    pub async fn open_default() -> Result<Self, StoreError> {
        Self::open(CONFIG.database_url.as_str()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and seed categories on a fresh store. A store that
    /// already has the schema is left untouched, so deleting a seed
    /// category sticks across reopens.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        if self.schema_present().await? {
            return Ok(());
        }

        // execute statement by statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }

        for name in SEED_CATEGORIES {
            let category = Category::new(name);
            sqlx::query("INSERT INTO categories (name, updated) VALUES (?, ?)")
                .bind(&category.name)
                .bind(category.updated_at)
                .execute(&self.pool)
                .await?;
        }

        info!("schema created and seed categories inserted");
        Ok(())
    }

    /// Destructive version upgrade: drop everything and recreate. There is
    /// no data migration; all users, categories, and items are lost.
    pub async fn upgrade_schema(&self, from_version: u32, to_version: u32) -> Result<(), StoreError> {
        warn!(
            from_version,
            to_version, "upgrading schema by destructive reset, existing data will be dropped"
        );
        for stmt in SQLITE_DROP.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        self.init_schema().await
    }

    async fn schema_present(&self) -> Result<bool, StoreError> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'categories'",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    /// Stamp the owning category with the current time. Runs inside the
    /// caller's transaction so an item write and its category touch commit
    /// together.
    pub(crate) async fn touch_category<'e, E>(executor: E, name: &str) -> Result<(), StoreError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query("UPDATE categories SET updated = ? WHERE name = ?")
            .bind(now_millis())
            .bind(name)
            .execute(executor)
            .await?;
        Ok(())
    }
}
