//! Wallpaper resource, its stored/outbound forms, and request DTOs.

use animewall_core::search::non_blank;
use mongodb::bson::oid::ObjectId;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::Resource;
use crate::filter::Filter;

// ---------------------------------------------------------------------------
// Resource shape
// ---------------------------------------------------------------------------

/// Direct download URLs by device type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImageUrls {
    /// Direct URL for mobile resolution (e.g., 1080x2400)
    #[validate(custom(function = http_url))]
    pub mobile: Option<String>,
    /// Direct URL for desktop/4K resolution (e.g., 3840x2160)
    #[validate(custom(function = http_url))]
    pub desktop: Option<String>,
}

/// Wallpapers collection schema.
///
/// Also the create payload. `downloads` is part of the shape but owned by
/// the server; the create handler discards any client-supplied value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Wallpaper {
    /// Wallpaper title
    pub title: String,
    /// Anime name or series
    pub anime: String,
    /// Searchable tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Preview/thumbnail image URL
    #[validate(custom(function = http_url))]
    pub thumbnail_url: String,
    /// Download URLs by device type
    #[validate(nested)]
    #[schema(inline)]
    pub image_urls: ImageUrls,
    /// Whether this wallpaper requires purchase
    #[serde(default)]
    pub is_premium: bool,
    /// Price in USD if premium
    #[serde(default)]
    #[validate(range(min = 0.0))]
    #[schema(minimum = 0)]
    pub price: f64,
    /// Artist/Uploader name
    pub author: Option<String>,
    /// Dominant colors (hex)
    #[serde(default)]
    pub color_palette: Vec<String>,
    /// e.g., 16:9, 21:9, 9:16
    pub aspect_ratio: Option<String>,
    /// Download count
    #[serde(default)]
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub downloads: i64,
}

impl Resource for Wallpaper {
    const COLLECTION: &'static str = "wallpaper";
}

/// A wallpaper as stored: the store-assigned `_id` plus the resource fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub wallpaper: Wallpaper,
}

/// A wallpaper as returned to clients, with the id as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallpaperOut {
    pub id: String,
    #[serde(flatten)]
    pub wallpaper: Wallpaper,
}

impl From<WallpaperRecord> for WallpaperOut {
    fn from(record: WallpaperRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            wallpaper: record.wallpaper,
        }
    }
}

/// Accept only absolute `http`/`https` URLs with a host.
///
/// Reports the `url` code so failures read like the built-in check.
fn http_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(())
        }
        _ => Err(ValidationError::new("url")),
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/wallpapers`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WallpaperSearchParams {
    /// Search by title, anime, or tags.
    pub q: Option<String>,
    pub anime: Option<String>,
    /// Accepts `true/false`, `1/0`, `yes/no` and `on/off`.
    #[serde(default, deserialize_with = "query_bool")]
    pub is_premium: Option<bool>,
    /// Result count; out-of-range values are rejected, not clamped.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

fn query_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(D::Error::invalid_value(Unexpected::Str(&raw), &"a boolean")),
    }
}

impl WallpaperSearchParams {
    /// Build the store filter for these parameters.
    ///
    /// `q` becomes an OR over title, anime and any tag; `anime` and
    /// `is_premium` each add their own condition; everything present is
    /// AND-ed. Nothing present matches all wallpapers.
    pub fn to_filter(&self) -> Filter {
        let mut conditions = Vec::new();

        if let Some(q) = non_blank(self.q.as_deref()) {
            conditions.push(Filter::Or(vec![
                Filter::contains("title", q),
                Filter::contains("anime", q),
                Filter::any_contains("tags", q),
            ]));
        }
        if let Some(anime) = non_blank(self.anime.as_deref()) {
            conditions.push(Filter::contains("anime", anime));
        }
        if let Some(is_premium) = self.is_premium {
            conditions.push(Filter::equals("is_premium", is_premium));
        }

        Filter::and(conditions)
    }
}

/// Body of `POST /api/wallpapers/{id}/download`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DownloadRequest {
    /// `"mobile"` or `"desktop"`; unknown values are treated as desktop.
    pub device: String,
}

/// Response of a successful download resolution.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    pub url: String,
}

/// Response of a successful create.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response of a list query.
#[derive(Debug, Clone, Serialize)]
pub struct WallpaperList {
    pub items: Vec<WallpaperOut>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
