pub mod health;
pub mod schema;
pub mod wallpapers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /wallpapers                                      search (GET), create (POST)
/// /wallpapers/{id}/download                        resolve URL + count (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/wallpapers", wallpapers::router())
}
