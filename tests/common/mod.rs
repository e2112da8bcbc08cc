//! Shared fixtures for integration tests
//!
//! Every test gets its own in-memory SQLite store with the shipped schema.
//! The pool holds exactly one connection, so the in-memory database lives
//! as long as the pool.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tower::ServiceExt;

use newsd::config::DatabaseConfig;
use newsd::http_server::{build_router, AppState};
use newsd::model::schema;
use newsd::session::{self, DbPool};

/// Open a fresh single-connection in-memory store with the schema applied
pub async fn test_pool() -> DbPool {
    let config = DatabaseConfig {
        pool_size: 1,
        max_overflow: 0,
        pool_timeout_secs: 5,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };
    let pool = session::connect(&config).await.expect("connect test pool");
    schema::create_schema(&pool).await.expect("create schema");
    pool
}

/// Open a multi-connection store backed by a file under `dir`
pub async fn file_pool(dir: &Path) -> DbPool {
    let url = format!("sqlite://{}?mode=rwc", dir.join("news.db").display());
    let config = DatabaseConfig {
        pool_size: 2,
        max_overflow: 6,
        pool_timeout_secs: 30,
        ..DatabaseConfig::with_url(url)
    };
    let pool = session::connect(&config).await.expect("connect file pool");
    schema::create_schema(&pool).await.expect("create schema");
    pool
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub async fn seed_category(pool: &DbPool, id: i64, name: &str, sort_order: i64) {
    sqlx::query("INSERT INTO news_category (id, name, sort_order) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(sort_order)
        .execute(pool)
        .await
        .expect("insert category");
}

pub async fn seed_news(
    pool: &DbPool,
    id: i64,
    category_id: i64,
    views: i64,
    publish_time: NaiveDateTime,
) {
    sqlx::query(
        "INSERT INTO news (id, title, description, content, image, author, category_id, views, publish_time)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(format!("News {}", id))
    .bind(Option::<String>::None)
    .bind(format!("Content of news {}", id))
    .bind(Some(format!("https://img.example/{}.png", id)))
    .bind(Some("newsroom".to_string()))
    .bind(category_id)
    .bind(views)
    .bind(publish_time)
    .execute(pool)
    .await
    .expect("insert news");
}

pub async fn views_of(pool: &DbPool, news_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT views FROM news WHERE id = ?")
        .bind(news_id)
        .fetch_one(pool)
        .await
        .expect("read views")
}

/// Category 1 holds news 10, 11 and 12; category 2 holds news 20
pub async fn seed_scenario(pool: &DbPool) {
    seed_category(pool, 1, "tech", 1).await;
    seed_category(pool, 2, "sports", 2).await;

    seed_news(pool, 10, 1, 5, day(2024, 1, 1)).await;
    seed_news(pool, 11, 1, 5, day(2024, 2, 1)).await;
    seed_news(pool, 12, 1, 9, day(2024, 1, 15)).await;
    seed_news(pool, 20, 2, 100, day(2024, 3, 1)).await;
}

pub fn test_router(pool: &DbPool) -> Router {
    build_router(AppState::new(pool.clone()))
}

/// Issue a GET and return status plus parsed JSON body
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
