//! Catalog store: categories and the items that belong to them.
//!
//! Category deletion relies on the engine's ON DELETE CASCADE, so the
//! category and its items disappear in one atomic statement. Item writes
//! that touch the owning category's timestamp run in one transaction.

use crate::db::models::{Category, CategorySort, Item};
use crate::db::sqlite::InventoryStorage;
use crate::error::StoreError;
use tracing::{debug, warn};

impl InventoryStorage {
    /// One-shot snapshot of all categories. Both sort orders compare by
    /// name; see `CategorySort`.
    pub async fn list_categories(&self, order: CategorySort) -> Result<Vec<Category>, StoreError> {
        let sql = match order {
            CategorySort::NameAscending => {
                "SELECT name, updated FROM categories ORDER BY name ASC"
            }
            CategorySort::NameDescending => {
                "SELECT name, updated FROM categories ORDER BY name DESC"
            }
        };
        let rows = sqlx::query_as::<_, Category>(sql)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Insert a category. Returns false instead of raising, both on a name
    /// collision and on any lower-level failure.
    pub async fn add_category(&self, category: &Category) -> bool {
        let res = sqlx::query("INSERT INTO categories (name, updated) VALUES (?, ?)")
            .bind(&category.name)
            .bind(category.updated_at)
            .execute(self.pool())
            .await;
        match res.map_err(|e| StoreError::from_sqlx(e, &category.name)) {
            Ok(_) => true,
            Err(e) => {
                if !e.is_duplicate_key() {
                    warn!(category = %category.name, error = %e, "add_category failed");
                }
                false
            }
        }
    }

    /// Update a category's timestamp, matched on name. Updating a name
    /// that does not exist affects zero rows and is a silent no-op.
    pub async fn update_category(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query("UPDATE categories SET updated = ? WHERE name = ?")
            .bind(category.updated_at)
            .bind(&category.name)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Delete a category by name. The items foreign key cascades, so every
    /// item under the category is removed in the same statement.
    pub async fn delete_category(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM categories WHERE name = ?")
            .bind(&category.name)
            .execute(self.pool())
            .await?;
        debug!(category = %category.name, "category deleted with cascade");
        Ok(())
    }

    /// Snapshot of all items under a category, in insertion order.
    pub async fn list_items(&self, category_name: &str) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, qty, category FROM items WHERE category = ? ORDER BY id",
        )
        .bind(category_name)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn get_item(&self, item_id: i64) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, qty, category FROM items WHERE id = ?",
        )
        .bind(item_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// Insert an item and bump the owning category's timestamp, committed
    /// as one transaction. Returns the item carrying its assigned id.
    pub async fn add_item(&self, item: &Item) -> Result<Item, StoreError> {
        let mut tx = self.pool().begin().await?;

        let res = sqlx::query(
            "INSERT INTO items (name, description, qty, category) VALUES (?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.qty)
        .bind(&item.category_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::from_sqlx(e, &item.category_name))?;

        let id = res.last_insert_rowid();
        Self::touch_category(&mut *tx, &item.category_name).await?;
        tx.commit().await?;

        debug!(id, category = %item.category_name, "item added");
        Ok(Item {
            id,
            ..item.clone()
        })
    }

    /// Full-row update matched by id, plus the category touch, in one
    /// transaction. An unknown id affects zero rows and fails silently.
    pub async fn update_item(&self, item: &Item) -> Result<(), StoreError> {
        let mut tx = self.pool().begin().await?;

        sqlx::query(
            "UPDATE items SET name = ?, description = ?, qty = ?, category = ? WHERE id = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.qty)
        .bind(&item.category_name)
        .bind(item.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::from_sqlx(e, &item.category_name))?;

        Self::touch_category(&mut *tx, &item.category_name).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete an item by id. The owning category's timestamp is left alone.
    pub async fn delete_item(&self, item_id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(item_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
