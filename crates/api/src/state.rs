use animewall_db::DbHandle;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle; degraded when no database is configured.
    pub db: DbHandle,
}
