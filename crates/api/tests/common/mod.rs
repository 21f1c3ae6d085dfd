#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use animewall_api::router::build_app_router;
use animewall_api::state::AppState;
use animewall_db::store::MemoryStore;
use animewall_db::DbHandle;

/// Build the full application router (same middleware stack as production)
/// over the given store handle.
pub fn build_test_app(db: DbHandle) -> Router {
    build_app_router(AppState { db })
}

/// A fresh in-memory store plus an app wired to it. The store is returned
/// so tests can inspect what reached it.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new("animewall_test"));
    let app = build_test_app(DbHandle::from_store(store.clone()));
    (app, store)
}

/// An app with no store behind it.
pub fn degraded_app() -> Router {
    build_test_app(DbHandle::unavailable())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid wallpaper payload; override fields with `merge`.
pub fn wallpaper_payload(title: &str, anime: &str, tags: &[&str], is_premium: bool) -> Value {
    let price = if is_premium { 1.99 } else { 0.0 };
    json!({
        "title": title,
        "anime": anime,
        "tags": tags,
        "thumbnail_url": "https://cdn.example.com/thumb.jpg",
        "image_urls": {
            "mobile": "https://cdn.example.com/mobile.jpg",
            "desktop": "https://cdn.example.com/desktop.jpg"
        },
        "is_premium": is_premium,
        "price": price,
        "color_palette": ["#112233"],
        "aspect_ratio": "16:9"
    })
}

/// Shallow-merge `overrides` into `base`.
pub fn merge(mut base: Value, overrides: Value) -> Value {
    if let (Some(target), Value::Object(source)) = (base.as_object_mut(), overrides) {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
    base
}

/// Create a wallpaper through the API and return its id.
pub async fn create(app: &Router, payload: Value) -> String {
    let response = post_json(app.clone(), "/api/wallpapers", payload).await;
    assert_eq!(response.status(), 200, "create should succeed");
    body_json(response).await["id"]
        .as_str()
        .expect("id must be a string")
        .to_string()
}

/// Fetch a wallpaper's current download counter by listing everything.
pub async fn downloads_of(app: &Router, id: &str) -> i64 {
    let json = body_json(get(app.clone(), "/api/wallpapers?limit=100").await).await;
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["id"] == id)
        .and_then(|item| item["downloads"].as_i64())
        .expect("wallpaper should be listed")
}
