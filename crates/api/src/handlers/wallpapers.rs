//! Handlers for the wallpaper catalog.
//!
//! Create, search, and download-with-counter endpoints. The download flow
//! looks the record up, bumps its counter, then resolves a URL; a failed
//! resolution does not undo the increment.

use animewall_core::download::{resolve_download_url, DeviceClass};
use animewall_core::error::CoreError;
use animewall_db::models::wallpaper::{
    CreatedResponse, DownloadRequest, DownloadResponse, Wallpaper, WallpaperList,
    WallpaperSearchParams,
};
use animewall_db::repositories::WallpaperRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/wallpapers
///
/// Store a new wallpaper. The download counter always starts at zero.
pub async fn create_wallpaper(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<Wallpaper>,
) -> AppResult<impl IntoResponse> {
    if input.downloads != 0 {
        tracing::warn!(
            downloads = input.downloads,
            "Ignoring client-supplied download count on create"
        );
        input.downloads = 0;
    }

    let id = WallpaperRepo::create(state.db.store()?, &input).await?;

    tracing::info!(wallpaper_id = %id, title = %input.title, "Wallpaper created");

    Ok(Json(CreatedResponse { id }))
}

/// GET /api/wallpapers?q=&anime=&is_premium=&limit=
///
/// Search wallpapers. Absent parameters do not constrain the result.
pub async fn list_wallpapers(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<WallpaperSearchParams>,
) -> AppResult<impl IntoResponse> {
    let items = WallpaperRepo::search(state.db.store()?, &params).await?;

    tracing::debug!(count = items.len(), "Wallpapers listed");

    Ok(Json(WallpaperList { items }))
}

/// POST /api/wallpapers/{id}/download
///
/// Count a download and return the URL for the requested device.
pub async fn download_wallpaper(
    State(state): State<AppState>,
    Path(wallpaper_id): Path<String>,
    ValidatedJson(body): ValidatedJson<DownloadRequest>,
) -> AppResult<impl IntoResponse> {
    let store = state.db.store()?;

    let record = WallpaperRepo::find_by_id(store, &wallpaper_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Wallpaper",
                id: wallpaper_id.clone(),
            })
        })?;

    // Counted before resolution: a wallpaper with no usable URL still
    // records the attempt.
    if !WallpaperRepo::increment_downloads(store, record.id).await? {
        tracing::warn!(
            wallpaper_id = %wallpaper_id,
            "Download counter update matched no wallpaper"
        );
    }

    let device = DeviceClass::from_device(&body.device);
    let urls = &record.wallpaper.image_urls;
    let url = resolve_download_url(device, urls.mobile.as_deref(), urls.desktop.as_deref())?;

    tracing::info!(wallpaper_id = %wallpaper_id, ?device, "Wallpaper download resolved");

    Ok(Json(DownloadResponse {
        url: url.to_string(),
    }))
}
