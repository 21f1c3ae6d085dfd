//! Wallpaper search constants and helpers.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of wallpapers returned by a list query.
pub const DEFAULT_WALLPAPER_LIMIT: i64 = 24;

/// Smallest accepted `limit`.
pub const MIN_WALLPAPER_LIMIT: i64 = 1;

/// Largest accepted `limit`.
pub const MAX_WALLPAPER_LIMIT: i64 = 100;

/// Resolve an optional user-provided limit to its effective value.
///
/// Unlike a clamp, this assumes the value has already been range-checked at
/// the request boundary; it only fills in the default.
pub fn effective_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_WALLPAPER_LIMIT)
}

/// Normalize an optional search term: blank strings count as absent.
pub fn non_blank(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
