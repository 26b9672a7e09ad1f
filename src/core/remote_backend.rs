//! Remote-first storage strategy with local degradation.
//!
//! Reads go to the document store; a failed read falls back to the local
//! cache and then to the seed set. Successful non-empty reads refresh the
//! local cache so later offline reads show the last known remote state.
//!
//! Writes go to the document store; a failed write applies the same change to
//! the local cache and reports `WriteOutcome::LocalOnly`.

use super::{
    LocalBackend,
    catalog::{CatalogBackend, StorageMode, WriteOutcome},
    seed::{seed_prices, seed_products},
};
use crate::{
    errors::Result,
    models::{GoldPrice, PriceSet, Product},
    remote::{
        DocumentStore, Fields, PRICES_DOCUMENT, PRODUCTS_COLLECTION, RemoteError,
        SETTINGS_COLLECTION,
    },
};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Remote backend over any [`DocumentStore`]
pub struct RemoteBackend {
    remote: Arc<dyn DocumentStore>,
    local: LocalBackend,
}

impl RemoteBackend {
    /// Pairs a document store with the local cache it degrades to
    #[must_use]
    pub fn new(remote: Arc<dyn DocumentStore>, local: LocalBackend) -> Self {
        Self { remote, local }
    }

    async fn fetch_products(&self) -> std::result::Result<Vec<Product>, RemoteError> {
        let documents = self.remote.list_documents(PRODUCTS_COLLECTION).await?;
        let products = documents
            .into_iter()
            .filter_map(|doc| {
                let id = doc.id.clone();
                serde_json::from_value::<Product>(doc.into_record())
                    .inspect_err(|e| warn!("Skipping malformed product document '{}': {}", id, e))
                    .ok()
            })
            .collect();
        Ok(products)
    }

    /// Reads the price board document. A board that does not hold every tier
    /// exactly once is reported as a decode failure.
    async fn fetch_prices(&self) -> std::result::Result<Option<PriceSet>, RemoteError> {
        let Some(document) = self
            .remote
            .get_document(SETTINGS_COLLECTION, PRICES_DOCUMENT)
            .await?
        else {
            return Ok(None);
        };

        let values = document.fields.get("values").cloned().unwrap_or(Value::Null);
        let prices: PriceSet = serde_json::from_value(values)
            .map_err(|e| RemoteError::Decode(format!("gold prices: {e}")))?;
        Ok(Some(prices))
    }

    async fn prune_cache(&self, id: &str) -> bool {
        self.local
            .prune_cached(id)
            .await
            .inspect_err(|e| warn!("Could not prune '{}' from local cache: {}", id, e))
            .unwrap_or(false)
    }
}

fn to_fields<T: Serialize + ?Sized>(value: &T) -> Result<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => {
            let mut fields = Fields::new();
            fields.insert("value".to_string(), other);
            Ok(fields)
        }
    }
}

#[async_trait]
impl CatalogBackend for RemoteBackend {
    fn mode(&self) -> StorageMode {
        StorageMode::Remote
    }

    async fn list_products(&self) -> Vec<Product> {
        match self.fetch_products().await {
            Ok(products) if products.is_empty() => {
                debug!("Remote products collection is empty, returning seed set");
                seed_products()
            }
            Ok(products) => {
                if let Err(e) = self.local.cache_products(&products).await {
                    warn!("Could not refresh local product cache: {}", e);
                }
                products
            }
            Err(e) => {
                warn!(
                    "Remote product read from {} failed, using local cache: {}",
                    self.remote.backend_tag(),
                    e
                );
                self.local.list_products().await
            }
        }
    }

    async fn save_product(&self, product: &Product) -> Result<WriteOutcome> {
        let fields = to_fields(product)?;
        match self
            .remote
            .set_document(PRODUCTS_COLLECTION, &product.id, fields)
            .await
        {
            Ok(()) => Ok(WriteOutcome::Remote),
            Err(cause) => {
                warn!(
                    "Remote save of product '{}' failed, saving locally: {}",
                    product.id, cause
                );
                self.local.apply_save(product).await?;
                Ok(WriteOutcome::LocalOnly { cause })
            }
        }
    }

    async fn delete_product(&self, id: &str) -> Result<WriteOutcome> {
        match self.remote.delete_document(PRODUCTS_COLLECTION, id).await {
            Ok(()) => {
                self.prune_cache(id).await;
                Ok(WriteOutcome::Remote)
            }
            Err(cause) if cause.is_not_found() => {
                info!("Product '{}' not found remotely", id);
                if self.prune_cache(id).await {
                    Ok(WriteOutcome::Local)
                } else {
                    Ok(WriteOutcome::NotFound)
                }
            }
            Err(cause) => {
                warn!(
                    "Remote delete of product '{}' failed, deleting locally: {}",
                    id, cause
                );
                if self.local.apply_delete(id).await? {
                    Ok(WriteOutcome::LocalOnly { cause })
                } else {
                    info!("Product '{}' not in local listing either, nothing deleted", id);
                    Ok(WriteOutcome::NotFound)
                }
            }
        }
    }

    async fn list_prices(&self) -> Vec<GoldPrice> {
        match self.fetch_prices().await {
            Ok(Some(prices)) => {
                if let Err(e) = self.local.cache_prices(prices.as_slice()).await {
                    warn!("Could not refresh local price cache: {}", e);
                }
                prices.into_vec()
            }
            Ok(None) => {
                debug!("No remote price document, returning seed prices");
                seed_prices()
            }
            Err(e) => {
                warn!("Remote price read failed, using local cache: {}", e);
                self.local.list_prices().await
            }
        }
    }

    async fn replace_prices(&self, prices: &PriceSet) -> Result<WriteOutcome> {
        let mut fields = Fields::new();
        fields.insert("values".to_string(), serde_json::to_value(prices)?);

        match self
            .remote
            .set_document(SETTINGS_COLLECTION, PRICES_DOCUMENT, fields)
            .await
        {
            Ok(()) => Ok(WriteOutcome::Remote),
            Err(cause) => {
                warn!("Remote price update failed, saving locally: {}", cause);
                self.local.cache_prices(prices.as_slice()).await?;
                Ok(WriteOutcome::LocalOnly { cause })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        models::Karat,
        remote::InMemoryDocumentStore,
        test_utils::{sample_product, setup_local_store},
    };
    use serde_json::json;

    async fn backend() -> Result<(RemoteBackend, Arc<InMemoryDocumentStore>)> {
        let remote = Arc::new(InMemoryDocumentStore::new());
        let local = LocalBackend::new(setup_local_store().await?);
        let handle = Arc::clone(&remote);
        Ok((RemoteBackend::new(handle, local), remote))
    }

    #[tokio::test]
    async fn test_saved_product_document_shape() -> Result<()> {
        let (backend, remote) = backend().await?;
        backend.save_product(&sample_product("9", "Ring")).await?;

        let doc = remote
            .get_document(PRODUCTS_COLLECTION, "9")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.fields["name"], "Ring");
        assert_eq!(doc.fields["karat"], 21);
        Ok(())
    }

    #[tokio::test]
    async fn test_document_id_wins_over_body_id() -> Result<()> {
        let (backend, remote) = backend().await?;
        let mut fields = to_fields(&sample_product("stale", "Ring"))?;
        fields.insert("id".to_string(), json!("stale"));
        remote
            .set_document(PRODUCTS_COLLECTION, "fresh", fields)
            .await
            .unwrap();

        let products = backend.list_products().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "fresh");
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_documents_are_skipped() -> Result<()> {
        let (backend, remote) = backend().await?;
        backend.save_product(&sample_product("1", "Ring")).await?;
        remote
            .set_document(
                PRODUCTS_COLLECTION,
                "2",
                json!({ "name": "No karat" }).as_object().unwrap().clone(),
            )
            .await
            .unwrap();

        let products = backend.list_products().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
        Ok(())
    }

    #[tokio::test]
    async fn test_price_document_shape() -> Result<()> {
        let (backend, remote) = backend().await?;
        let set = PriceSet::new(seed_prices()).unwrap();
        assert_eq!(backend.replace_prices(&set).await?, WriteOutcome::Remote);

        let doc = remote
            .get_document(SETTINGS_COLLECTION, PRICES_DOCUMENT)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.fields["values"].as_array().unwrap().len(), 3);
        assert_eq!(doc.fields["values"][0]["karat"], 24);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_price_document_falls_back() -> Result<()> {
        let (backend, remote) = backend().await?;
        remote
            .set_document(
                SETTINGS_COLLECTION,
                PRICES_DOCUMENT,
                json!({ "values": "oops" }).as_object().unwrap().clone(),
            )
            .await
            .unwrap();

        let prices = backend.list_prices().await;
        assert_eq!(prices, seed_prices());
        assert!(prices.iter().any(|p| p.karat == Karat::K18));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicated_remote_tier_is_not_served_or_cached() -> Result<()> {
        let (backend, remote) = backend().await?;
        let mut board = seed_prices();
        board[0].buy += 100;
        backend.local.cache_prices(&board).await?;

        remote
            .set_document(
                SETTINGS_COLLECTION,
                PRICES_DOCUMENT,
                json!({ "values": [
                    { "karat": 21, "buy": 1, "sell": 2 },
                    { "karat": 21, "buy": 3, "sell": 4 },
                    { "karat": 24, "buy": 5, "sell": 6 }
                ] })
                .as_object()
                .unwrap()
                .clone(),
            )
            .await
            .unwrap();

        assert_eq!(backend.list_prices().await, board);

        remote.set_fail_reads(true);
        assert_eq!(backend.list_prices().await, board);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_remote_board_falls_back_to_cache() -> Result<()> {
        let (backend, remote) = backend().await?;
        let mut board = seed_prices();
        board[1].sell += 50;
        backend.local.cache_prices(&board).await?;

        remote
            .set_document(
                SETTINGS_COLLECTION,
                PRICES_DOCUMENT,
                json!({ "values": [] }).as_object().unwrap().clone(),
            )
            .await
            .unwrap();

        assert_eq!(backend.list_prices().await, board);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_remote_delete_of_unknown_id_is_not_found() -> Result<()> {
        let (backend, remote) = backend().await?;
        remote.set_fail_writes(true);

        assert_eq!(backend.delete_product("ghost").await?, WriteOutcome::NotFound);
        assert!(backend.local.cached_products().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_remote_delete_degrades() -> Result<()> {
        let (backend, remote) = backend().await?;
        remote.set_fail_writes(true);

        let outcome = backend.delete_product("4").await?;
        assert!(outcome.is_degraded());
        let cached = backend.local.cached_products().await.unwrap();
        assert!(cached.iter().all(|p| p.id != "4"));
        Ok(())
    }
}
