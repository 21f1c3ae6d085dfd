//! Resource shapes stored by the service.
//!
//! Each resource is an explicit typed record. Field constraints are declared
//! with `validator` and checked at the request boundary; the same structs
//! derive `utoipa::ToSchema` so their JSON schema can be published.

pub mod product;
pub mod user;
pub mod wallpaper;

use serde::Serialize;

/// A record type persisted in its own collection.
pub trait Resource: Serialize {
    /// Collection name: the lowercase type name.
    const COLLECTION: &'static str;
}
