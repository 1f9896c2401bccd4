#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use pizza_restaurants::{app, apply_migrations, connect_in_memory, run_seed, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router over a freshly migrated and seeded in-memory store.
pub async fn seeded_app() -> (Router, SqlitePool) {
    let pool = connect_in_memory().await.unwrap();
    apply_migrations(&pool).await.unwrap();
    run_seed(&pool).await.unwrap();
    (app(AppState::new(pool.clone())), pool)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let res: Response<Body> = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, content_type: &str, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn menu_item_count(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// JSON POST with an explicit `content-length`, the way a real client frames a large body.
pub async fn post_sized(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap();
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
