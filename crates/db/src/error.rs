use mongodb::bson;

/// Errors raised by the document store gateway.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No store connection was established at startup.
    #[error("Database not available")]
    Unavailable,

    /// A driver-level failure (connection, query or write).
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The store refused a write (e.g. incrementing a non-numeric field).
    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Store did not return an ObjectId for the inserted document")]
    MissingInsertedId,
}
