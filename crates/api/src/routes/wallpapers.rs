//! Route definitions for the wallpaper catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wallpapers;
use crate::state::AppState;

/// Wallpaper routes mounted at `/api/wallpapers`.
///
/// ```text
/// GET    /                  -> list_wallpapers
/// POST   /                  -> create_wallpaper
/// POST   /{id}/download     -> download_wallpaper
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wallpapers::list_wallpapers).post(wallpapers::create_wallpaper),
        )
        .route("/{id}/download", post(wallpapers::download_wallpaper))
}
