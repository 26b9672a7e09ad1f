//! Remote document store - a thin call-through to hosted CRUD primitives.
//!
//! Two logical containers are used: the `products` collection (document id is
//! the product id) and the `settings/gold_prices` document holding the whole
//! price board as `{ values: [...] }`.

pub mod codec;
mod document;
mod error;
mod firestore;
mod memory;

pub use document::{Document, DocumentStore, Fields};
pub use error::RemoteError;
pub use firestore::FirestoreClient;
pub use memory::InMemoryDocumentStore;

/// Collection holding one document per product
pub const PRODUCTS_COLLECTION: &str = "products";
/// Collection holding application settings
pub const SETTINGS_COLLECTION: &str = "settings";
/// Document (inside `settings`) holding the price board
pub const PRICES_DOCUMENT: &str = "gold_prices";
