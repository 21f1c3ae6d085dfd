//! Document Store Gateway.
//!
//! [`DocumentStore`] is the seam between the repositories and the actual
//! database. Everything crosses it as a BSON [`Document`]; typed records are
//! encoded and decoded by the helpers in the crate root.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

use crate::error::DbError;
use crate::filter::Filter;

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod mongo;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Operations the service needs from a document database.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection`, returning the store-assigned id.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId, DbError>;

    /// Return up to `limit` documents matching `filter`, in store order.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError>;

    async fn find_by_id(&self, collection: &str, id: ObjectId)
        -> Result<Option<Document>, DbError>;

    /// Atomically add `by` to the numeric `field` of document `id`.
    ///
    /// Returns `false` when no document has that id.
    async fn increment(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        by: i64,
    ) -> Result<bool, DbError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError>;

    fn database_name(&self) -> &str;
}
