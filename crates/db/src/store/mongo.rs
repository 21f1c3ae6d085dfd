use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

use super::DocumentStore;
use crate::error::DbError;
use crate::filter::Filter;

/// Database used when neither `DATABASE_NAME` nor the URI names one.
pub const DEFAULT_DATABASE_NAME: &str = "animewall";

/// [`DocumentStore`] backed by the official MongoDB driver.
///
/// The driver keeps its own connection pool, so a single instance is shared
/// by every request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build a client from `url` and select the database.
    ///
    /// The driver connects lazily; an unreachable server surfaces as an error
    /// on the first operation, not here.
    pub async fn connect(url: &str, database_name: Option<&str>) -> Result<Self, DbError> {
        let client = Client::with_uri_str(url).await?;
        let db = match database_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)),
        };
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId, DbError> {
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(DbError::MissingInsertedId)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        let query = filter.to_document();
        tracing::debug!(collection, %query, limit, "find");
        let cursor = self.collection(collection).find(query).limit(limit).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, DbError> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn increment(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        by: i64,
    ) -> Result<bool, DbError> {
        let mut inc = Document::new();
        inc.insert(field, by);
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$inc": inc })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(self.db.list_collection_names().await?)
    }

    fn database_name(&self) -> &str {
        self.db.name()
    }
}
