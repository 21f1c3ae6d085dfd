//! Integration tests for the resource schema endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn schema_lists_all_three_resources() {
    let response = get(common::degraded_app(), "/schema").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for resource in ["user", "product", "wallpaper"] {
        assert_eq!(json[resource]["type"], "object", "{resource} should be an object schema");
        assert!(json[resource]["properties"].is_object());
    }
}

#[tokio::test]
async fn wallpaper_schema_describes_fields_and_requirements() {
    let json = body_json(get(common::degraded_app(), "/schema").await).await;
    let wallpaper = &json["wallpaper"];

    let properties = wallpaper["properties"].as_object().unwrap();
    for field in [
        "title",
        "anime",
        "tags",
        "thumbnail_url",
        "image_urls",
        "is_premium",
        "price",
        "author",
        "color_palette",
        "aspect_ratio",
        "downloads",
    ] {
        assert!(properties.contains_key(field), "missing property {field}");
    }

    let required: Vec<&str> = wallpaper["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for field in ["title", "anime", "thumbnail_url", "image_urls"] {
        assert!(required.contains(&field), "{field} should be required");
    }

    // Nested URL shape is inlined rather than referenced. A described field
    // wraps the inlined object in a single-entry `oneOf`.
    let image_urls = &properties["image_urls"];
    assert!(image_urls.get("$ref").is_none());
    let inlined = &image_urls["oneOf"][0];
    assert_eq!(inlined["type"], "object");
    assert!(inlined["properties"]["mobile"].is_object());
    assert!(inlined["properties"]["desktop"].is_object());
}

#[tokio::test]
async fn user_schema_carries_age_bounds() {
    let json = body_json(get(common::degraded_app(), "/schema").await).await;
    let age = &json["user"]["properties"]["age"];
    assert_eq!(age["minimum"].as_f64(), Some(0.0));
    assert_eq!(age["maximum"].as_f64(), Some(120.0));
}
