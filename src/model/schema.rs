//! Table definitions for `news_category` and `news`
//!
//! Only `IF NOT EXISTS` DDL lives here. It is used to bootstrap development
//! and test databases; production tables are managed out-of-band.

use crate::session::DbPool;

/// DDL statements for the active backend, in execution order
#[cfg(feature = "mysql")]
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS news_category (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(50) NOT NULL UNIQUE,
        sort_order INT NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
    ) DEFAULT CHARSET = utf8mb4",
    "CREATE TABLE IF NOT EXISTS news (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        description VARCHAR(500) NULL,
        content TEXT NOT NULL,
        image VARCHAR(255) NULL,
        author VARCHAR(100) NULL,
        category_id BIGINT NOT NULL,
        views BIGINT NOT NULL DEFAULT 0,
        publish_time DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
        INDEX fk_news_category_idx (category_id),
        INDEX idx_publish_time (publish_time),
        CONSTRAINT fk_news_category FOREIGN KEY (category_id) REFERENCES news_category (id)
    ) DEFAULT CHARSET = utf8mb4",
];

/// DDL statements for the active backend, in execution order
#[cfg(not(feature = "mysql"))]
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS news_category (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(50) NOT NULL UNIQUE,
        sort_order INTEGER NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS news (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        description VARCHAR(500),
        content TEXT NOT NULL,
        image VARCHAR(255),
        author VARCHAR(100),
        category_id INTEGER NOT NULL REFERENCES news_category (id),
        views INTEGER NOT NULL DEFAULT 0,
        publish_time DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS fk_news_category_idx ON news (category_id)",
    "CREATE INDEX IF NOT EXISTS idx_publish_time ON news (publish_time)",
    // SQLite has no ON UPDATE clause; touch updated_at from a trigger instead.
    "CREATE TRIGGER IF NOT EXISTS news_touch_updated_at
        AFTER UPDATE ON news FOR EACH ROW WHEN NEW.updated_at = OLD.updated_at
        BEGIN
            UPDATE news SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
        END",
    "CREATE TRIGGER IF NOT EXISTS news_category_touch_updated_at
        AFTER UPDATE ON news_category FOR EACH ROW WHEN NEW.updated_at = OLD.updated_at
        BEGIN
            UPDATE news_category SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
        END",
];

/// Create both tables and their indexes if they are missing
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(*statement).execute(pool).await?;
    }
    Ok(())
}
