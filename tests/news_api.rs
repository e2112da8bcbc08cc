//! News API Tests
//!
//! Drives the router end to end over an in-memory store:
//! - envelopes and wire shapes of all four endpoints
//! - pagination arithmetic
//! - 404 on missing news without touching any counter
//! - 500 on store failures, with the view increment rolled back
//! - concurrent detail reads on a file-backed store
//! - 422 on bad parameters
//! - permissive CORS

#![cfg(not(feature = "mysql"))]

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_categories_envelope() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "get categories success");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "tech");
    assert_eq!(data[0]["sort_order"], 1);
    assert!(data[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_categories_skip_and_limit() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/categories?skip=1&limit=5").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 2);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_second_page_of_fifteen() {
    let pool = test_pool().await;
    seed_category(&pool, 1, "tech", 1).await;
    for id in 1..=15 {
        seed_news(&pool, id, 1, 0, day(2024, 1, id as u32)).await;
    }
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/list?categoryId=1&page=2&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "get news list success");
    assert_eq!(body["data"]["total"], 15);
    assert_eq!(body["data"]["hasMore"], false);
    let list = body["data"]["list"].as_array().unwrap();
    assert_eq!(list.len(), 5);
    // newest first: page 2 holds the five oldest
    assert_eq!(list[0]["id"], 5);
    assert_eq!(list[4]["id"], 1);
}

#[tokio::test]
async fn test_list_first_page_has_more() {
    let pool = test_pool().await;
    seed_category(&pool, 1, "tech", 1).await;
    for id in 1..=15 {
        seed_news(&pool, id, 1, 0, day(2024, 1, id as u32)).await;
    }
    let router = test_router(&pool);

    let (_, body) = get_json(&router, "/api/news/list?categoryId=1").await;

    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["hasMore"], true);
    assert!(body["data"]["list"]
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["category_id"] == 1));
}

#[tokio::test]
async fn test_list_page_size_over_limit_rejected() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/list?categoryId=1&pageSize=101").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_list_missing_category_rejected() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/list").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("categoryId"));
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn test_detail_increments_and_embeds_related() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/detail?newsId=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "get news detail success");
    let data = &body["data"];
    assert_eq!(data["id"], 10);
    assert_eq!(data["categoryId"], 1);
    assert_eq!(data["publishTime"], "2024-01-01T00:00:00");
    assert_eq!(data["views"], 5);
    assert_eq!(data["author"], "newsroom");

    let related: Vec<i64> = data["relatedNews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(related, vec![12, 11]);

    assert_eq!(views_of(&pool, 10).await, 6);
}

#[tokio::test]
async fn test_detail_missing_is_404_and_changes_nothing() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/detail?newsId=999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "News not found");
    for (id, views) in [(10, 5), (11, 5), (12, 9), (20, 100)] {
        assert_eq!(views_of(&pool, id).await, views);
    }
}

#[tokio::test]
async fn test_detail_repeated_reads_count_each_view() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    for expected_before in 9..12 {
        let (_, body) = get_json(&router, "/api/news/detail?newsId=12").await;
        assert_eq!(body["data"]["views"], expected_before);
    }
    assert_eq!(views_of(&pool, 12).await, 12);
}

#[tokio::test]
async fn test_detail_non_integer_id_rejected() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let (status, _) = get_json(&router, "/api/news/detail?newsId=ten").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_detail_zero_row_increment_is_500() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    sqlx::query(
        "CREATE TRIGGER news_freeze_views BEFORE UPDATE ON news
         BEGIN SELECT RAISE(IGNORE); END",
    )
    .execute(&pool)
    .await
    .unwrap();
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/detail?newsId=10").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"code": 500, "message": "Failed to increase news views", "data": null})
    );
    assert_eq!(views_of(&pool, 10).await, 5);
}

#[tokio::test]
async fn test_detail_store_fault_rolls_back_increment() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    // News 11 is a related candidate of news 10 and can no longer be decoded.
    sqlx::query("UPDATE news SET publish_time = 'not a timestamp' WHERE id = 11")
        .execute(&pool)
        .await
        .unwrap();
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/detail?newsId=10").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"code": 500, "message": "Internal server error", "data": null})
    );
    assert_eq!(views_of(&pool, 10).await, 5);

    // the pool's only connection came back usable
    let (status, _) = get_json(&router, "/api/news/detail?newsId=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(views_of(&pool, 12).await, 10);
}

// =============================================================================
// Concurrent detail reads
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_detail_requests_all_count() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_pool(dir.path()).await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let mut handles = Vec::new();
    for _ in 0..40 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            get_json(&router, "/api/news/detail?newsId=10").await
        }));
    }

    let mut seen = Vec::new();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK, "body: {}", body);
        seen.push(body["data"]["views"].as_i64().unwrap());
    }

    // each request saw a distinct pre-increment count
    seen.sort_unstable();
    assert_eq!(seen, (5..45).collect::<Vec<i64>>());
    assert_eq!(views_of(&pool, 10).await, 45);
}

// =============================================================================
// Related
// =============================================================================

#[tokio::test]
async fn test_related_summaries() {
    let pool = test_pool().await;
    seed_scenario(&pool).await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/related?categoryId=1&newsId=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "get related news success");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], 12);
    assert_eq!(data[0]["views"], 9);
    assert_eq!(data[0]["publish_time"], "2024-01-15T00:00:00");
    let mut keys: Vec<&String> = data[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["id", "image", "publish_time", "title", "views"]);

    // related never counts views
    assert_eq!(views_of(&pool, 12).await, 9);
}

// =============================================================================
// Health and CORS
// =============================================================================

#[tokio::test]
async fn test_health_reports_store() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_is_permissive() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/news/categories")
        .header(header::ORIGIN, "https://reader.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-client-version")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://reader.example"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let pool = test_pool().await;
    let router = test_router(&pool);

    let (status, body) = get_json(&router, "/api/news/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}
