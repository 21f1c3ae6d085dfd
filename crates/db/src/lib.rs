//! Document store access for the wallpaper service.
//!
//! [`DbHandle`] is created once at startup and cloned into request state.
//! When no store could be set up it stays usable but degraded: every
//! operation fails with [`DbError::Unavailable`] instead of taking the
//! process down.

pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use mongodb::bson;
use serde::de::DeserializeOwned;

pub use error::DbError;
pub use filter::Filter;
use models::Resource;
use store::{DocumentStore, MongoStore};

/// Store connection settings.
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    /// MongoDB connection string. `None` leaves the store unavailable.
    pub url: Option<String>,
    /// Database name. Falls back to the URI's default database.
    pub name: Option<String>,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var         | Default                          |
    /// |-----------------|----------------------------------|
    /// | `DATABASE_URL`  | unset (store unavailable)        |
    /// | `DATABASE_NAME` | database named in the URI        |
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            url: non_empty("DATABASE_URL"),
            name: non_empty("DATABASE_NAME"),
        }
    }
}

/// Shared handle to the document store. Cheap to clone.
#[derive(Clone)]
pub struct DbHandle {
    store: Option<Arc<dyn DocumentStore>>,
    url_configured: bool,
}

impl DbHandle {
    /// Set up the MongoDB store described by `config`.
    ///
    /// Never fails: a missing URL or a client that cannot be built yields a
    /// degraded handle and a warning.
    pub async fn connect(config: &DbConfig) -> Self {
        let Some(url) = config.url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, running without a database");
            return Self::unavailable();
        };

        match MongoStore::connect(url, config.name.as_deref()).await {
            Ok(store) => {
                tracing::info!(database = store.database_name(), "Database client created");
                Self {
                    store: Some(Arc::new(store)),
                    url_configured: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create database client, running degraded");
                Self {
                    store: None,
                    url_configured: true,
                }
            }
        }
    }

    /// Wrap an already constructed store.
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            url_configured: true,
        }
    }

    /// A handle with no store behind it.
    pub fn unavailable() -> Self {
        Self {
            store: None,
            url_configured: false,
        }
    }

    /// Whether a connection string was supplied at all.
    pub fn url_configured(&self) -> bool {
        self.url_configured
    }

    /// The store, or [`DbError::Unavailable`] in degraded mode.
    pub fn store(&self) -> Result<&dyn DocumentStore, DbError> {
        self.store.as_deref().ok_or(DbError::Unavailable)
    }
}

/// Encode `record` and insert it into its collection. Returns the new id as
/// a hex string.
pub async fn create_document<R: Resource + Sync>(
    store: &dyn DocumentStore,
    record: &R,
) -> Result<String, DbError> {
    let document = bson::to_document(record)?;
    let id = store.insert_one(R::COLLECTION, document).await?;
    tracing::debug!(collection = R::COLLECTION, %id, "Document inserted");
    Ok(id.to_hex())
}

/// Find up to `limit` documents in `collection` matching `filter` and decode
/// them as `T`.
pub async fn get_documents<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    filter: &Filter,
    limit: i64,
) -> Result<Vec<T>, DbError> {
    store
        .find(collection, filter, limit)
        .await?
        .into_iter()
        .map(|document| bson::from_document(document).map_err(DbError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Product;
    use crate::store::MemoryStore;

    #[test]
    fn unavailable_handle_reports_unavailable() {
        let db = DbHandle::unavailable();
        assert!(!db.url_configured());
        assert!(matches!(db.store(), Err(DbError::Unavailable)));
    }

    #[tokio::test]
    async fn connect_without_url_is_degraded() {
        let db = DbHandle::connect(&DbConfig::default()).await;
        assert!(db.store().is_err());
        assert!(!db.url_configured());
    }

    #[tokio::test]
    async fn create_then_get_documents() {
        let db = DbHandle::from_store(Arc::new(MemoryStore::default()));
        let store = db.store().unwrap();

        let product = Product {
            title: "Poster".into(),
            description: None,
            price: 9.5,
            category: "print".into(),
            in_stock: true,
        };
        let id = create_document(store, &product).await.unwrap();
        assert_eq!(id.len(), 24);

        let found: Vec<Product> = get_documents(store, "product", &Filter::All, 10)
            .await
            .unwrap();
        assert_eq!(found, vec![product]);
    }
}
