//! Shared test utilities.
//!
//! Helpers for setting up an in-memory local store, a remote-mode catalog over
//! the in-memory document store, and sample records with sensible defaults.

use crate::{
    core::Catalog,
    errors::Result,
    models::{Category, Karat, Product},
    remote::InMemoryDocumentStore,
    storage::LocalStore,
};
use std::sync::Arc;

/// Creates an in-memory `SQLite` local store with its table created.
/// This is the standard setup for all storage tests.
pub async fn setup_local_store() -> Result<LocalStore> {
    LocalStore::connect("sqlite::memory:").await
}

/// Sets up a remote-mode catalog over an empty in-memory document store.
/// Returns the store too so tests can inject failures and inspect documents.
pub async fn setup_remote_catalog() -> Result<(Catalog, Arc<InMemoryDocumentStore>)> {
    let remote = Arc::new(InMemoryDocumentStore::new());
    let handle = Arc::clone(&remote);
    let catalog = Catalog::remote(handle, setup_local_store().await?);
    Ok((catalog, remote))
}

/// Creates a sample product.
///
/// # Defaults
/// * category: ring
/// * weight: 8.2 g
/// * karat: 21
/// * `price_estimate`: 850000
pub fn sample_product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: Category::Ring,
        weight: 8.2,
        price_estimate: 850_000,
        image_url: format!("https://picsum.photos/seed/{id}/600/600"),
        description: format!("{name} in 21K gold"),
        karat: Karat::K21,
    }
}
