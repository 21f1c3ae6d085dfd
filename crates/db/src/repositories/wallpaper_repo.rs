//! Repository for the `wallpaper` collection.

use animewall_core::search::effective_limit;
use mongodb::bson::{self, oid::ObjectId};

use crate::error::DbError;
use crate::models::wallpaper::{Wallpaper, WallpaperOut, WallpaperRecord, WallpaperSearchParams};
use crate::models::Resource;
use crate::store::DocumentStore;
use crate::{create_document, get_documents};

/// Counter bumped on every download request.
const DOWNLOADS_FIELD: &str = "downloads";

/// Wallpaper create/search/download operations.
pub struct WallpaperRepo;

impl WallpaperRepo {
    /// Insert a wallpaper and return its id.
    pub async fn create(store: &dyn DocumentStore, wallpaper: &Wallpaper) -> Result<String, DbError> {
        create_document(store, wallpaper).await
    }

    /// Run a search. `params` must already be validated.
    pub async fn search(
        store: &dyn DocumentStore,
        params: &WallpaperSearchParams,
    ) -> Result<Vec<WallpaperOut>, DbError> {
        let filter = params.to_filter();
        let limit = effective_limit(params.limit);
        let records: Vec<WallpaperRecord> =
            get_documents(store, Wallpaper::COLLECTION, &filter, limit).await?;
        Ok(records.into_iter().map(WallpaperOut::from).collect())
    }

    /// Look a wallpaper up by its client-facing id.
    ///
    /// An id that is not a valid ObjectId cannot exist and yields `None`.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<WallpaperRecord>, DbError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        match store.find_by_id(Wallpaper::COLLECTION, oid).await? {
            Some(document) => Ok(Some(bson::from_document(document)?)),
            None => Ok(None),
        }
    }

    /// Add one to the download counter of `id`, store-side.
    pub async fn increment_downloads(store: &dyn DocumentStore, id: ObjectId) -> Result<bool, DbError> {
        store
            .increment(Wallpaper::COLLECTION, id, DOWNLOADS_FIELD, 1)
            .await
    }
}
