//! Integration tests for liveness, diagnostics and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET / returns the liveness message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_message() {
    let (app, _) = common::memory_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Anime Wallpapers API running");
}

// ---------------------------------------------------------------------------
// Test: GET /test reports a working store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn diagnostics_report_working_store() {
    let (app, _) = common::memory_app();
    common::create(&app, common::wallpaper_payload("t", "a", &[], false)).await;

    let response = get(app, "/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["backend"], "✅ Running");
    assert_eq!(json["database"], "✅ Connected & Working");
    assert_eq!(json["database_url"], "✅ Set");
    assert_eq!(json["database_name"], "animewall_test");
    assert_eq!(json["connection_status"], "Connected");
    assert_eq!(json["collections"], serde_json::json!(["wallpaper"]));
}

// ---------------------------------------------------------------------------
// Test: GET /test never fails when the store is unavailable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn diagnostics_report_degraded_store() {
    let response = get(common::degraded_app(), "/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["backend"], "✅ Running");
    assert_eq!(json["database"], "❌ Not Available");
    assert!(json["database_url"].is_null());
    assert!(json["database_name"].is_null());
    assert_eq!(json["connection_status"], "Not Connected");
    assert_eq!(json["collections"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = common::memory_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = common::memory_app();
    let response = get(app, "/").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight accepts any origin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_accepts_any_origin() {
    let (app, _) = common::memory_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/wallpapers")
        .header("Origin", "https://some-frontend.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "https://some-frontend.example");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );

    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
