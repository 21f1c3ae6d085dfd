//! In-process [`DocumentStore`] with the same observable behaviour as
//! [`MongoStore`](super::MongoStore). Documents live in insertion order;
//! every write happens under one lock, which makes `increment` atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::DbError;
use crate::filter::Filter;

#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

fn has_id(document: &Document, id: ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(oid)) if *oid == id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, DbError> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            _ => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();
        if documents.iter().any(|d| has_id(d, id)) {
            return Err(DbError::Rejected(format!("duplicate _id {id}")));
        }
        documents.push(document);
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| filter.matches(d))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| has_id(d, id)))
            .cloned())
    }

    async fn increment(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        by: i64,
    ) -> Result<bool, DbError> {
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| has_id(d, id)))
        else {
            return Ok(false);
        };

        let current = match document.get(field) {
            None | Some(Bson::Null) => 0,
            Some(Bson::Int32(n)) => i64::from(*n),
            Some(Bson::Int64(n)) => *n,
            Some(other) => {
                return Err(DbError::Rejected(format!(
                    "cannot increment non-numeric field '{field}' ({:?})",
                    other.element_type()
                )))
            }
        };
        document.insert(field, current + by);
        Ok(true)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn database_name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
