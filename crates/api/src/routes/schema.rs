//! Publishes the JSON schema of every stored resource shape.

use animewall_db::models::product::Product;
use animewall_db::models::user::User;
use animewall_db::models::wallpaper::Wallpaper;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use utoipa::PartialSchema;

use crate::state::AppState;

/// GET /schema
async fn get_schema() -> Json<Value> {
    Json(json!({
        "user": User::schema(),
        "product": Product::schema(),
        "wallpaper": Wallpaper::schema(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/schema", get(get_schema))
}
