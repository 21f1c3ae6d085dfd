use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::truncate_chars;
use crate::state::AppState;

/// Most collection names listed by the diagnostics endpoint.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Longest slice of a store error quoted by the diagnostics endpoint.
const DIAGNOSTIC_ERROR_CHARS: usize = 50;

/// Liveness response payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Store diagnostics payload. Every field is descriptive text; the
/// endpoint reports problems here instead of failing.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: Option<&'static str>,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET / -- liveness.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Anime Wallpapers API running",
    })
}

/// GET /test -- store diagnostics.
async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running",
        database: "❌ Not Available".into(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Ok(store) = state.db.store() else {
        if state.db.url_configured() {
            response.database = "⚠️  Available but not initialized".into();
        }
        return Json(response);
    };

    response.database = "✅ Available".into();
    response.database_url = Some(if state.db.url_configured() {
        "✅ Set"
    } else {
        "❌ Not Set"
    });
    response.database_name = Some(store.database_name().to_string());
    response.connection_status = "Connected";

    match store.list_collection_names().await {
        Ok(names) => {
            response.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
            response.database = "✅ Connected & Working".into();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database diagnostics failed");
            response.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), DIAGNOSTIC_ERROR_CHARS)
            );
        }
    }

    Json(response)
}

/// Mount liveness and diagnostics routes at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
}
