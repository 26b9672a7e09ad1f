use super::RemoteError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Plain JSON fields of a document
pub type Fields = Map<String, Value>;

/// A document read from a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document id (last path segment)
    pub id: String,
    /// Document body as plain JSON
    pub fields: Fields,
}

impl Document {
    /// Body with the document id merged in under `"id"`.
    ///
    /// The id always wins over an `"id"` field stored in the body.
    #[must_use]
    pub fn into_record(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}

/// Call-through CRUD on a hosted document store.
///
/// Collections are always scanned in full; there is no query or paging surface.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name used in logs
    fn backend_tag(&self) -> &'static str;

    /// Every document in `collection`
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError>;

    /// One document, `None` when absent
    async fn get_document(&self, collection: &str, id: &str)
    -> Result<Option<Document>, RemoteError>;

    /// Creates or fully replaces a document
    async fn set_document(&self, collection: &str, id: &str, fields: Fields)
    -> Result<(), RemoteError>;

    /// Deletes a document. Stores that can tell report absence as `RemoteError::NotFound`.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), RemoteError>;
}
