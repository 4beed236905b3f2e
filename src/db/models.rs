use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Current wall-clock time as epoch milliseconds, the unit used for
/// `Category::updated_at`.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Sort order for category listings. Both variants order by category name;
/// `updated_at` never participates in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySort {
    NameAscending,
    NameDescending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Category {
    pub name: String,
    #[sqlx(rename = "updated")]
    pub updated_at: i64,
}

impl Category {
    /// A category stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: now_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Item {
    /// Store-assigned identifier; zero until the item has been inserted.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Opaque quantity; persisted and read back verbatim as text.
    pub qty: String,
    #[sqlx(rename = "category")]
    pub category_name: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        qty: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            qty: qty.into(),
            category_name: category_name.into(),
        }
    }
}
