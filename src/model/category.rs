use chrono::NaiveDateTime;
use serde::Serialize;

/// A news category (`news_category` row)
///
/// `name` is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
