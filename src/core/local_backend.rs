//! Local storage strategy.
//!
//! Products and prices live as whole JSON arrays under the `products` and
//! `prices` keys. Every product write reads the full list, mutates it and
//! writes it back; concurrent writers race and the last write wins.

use super::{
    catalog::{CatalogBackend, StorageMode, WriteOutcome},
    seed::{seed_prices, seed_products},
};
use crate::{
    errors::Result,
    models::{GoldPrice, PriceSet, Product, product},
    storage::{LocalStore, StoreKey},
};
use async_trait::async_trait;
use tracing::debug;

/// Local store backend. Also serves as the fallback cache of [`super::RemoteBackend`].
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: LocalStore,
}

impl LocalBackend {
    /// Wraps a local store
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Cached product list, if one was ever written
    pub async fn cached_products(&self) -> Option<Vec<Product>> {
        self.store.load(StoreKey::Products).await
    }

    /// Overwrites the cached product list
    pub async fn cache_products(&self, products: &[Product]) -> Result<()> {
        self.store.save(StoreKey::Products, products).await
    }

    /// Cached price board, if one was ever written and still holds every tier once
    pub async fn cached_prices(&self) -> Option<PriceSet> {
        self.store.load(StoreKey::Prices).await
    }

    /// Overwrites the cached price board
    pub async fn cache_prices(&self, prices: &[GoldPrice]) -> Result<()> {
        self.store.save(StoreKey::Prices, prices).await
    }

    /// Upserts into the cached list (seeded when empty) and writes it back.
    pub async fn apply_save(&self, product: &Product) -> Result<()> {
        let mut products = self.list_products().await;
        product::upsert_by_id(&mut products, product.clone());
        self.cache_products(&products).await
    }

    /// Removes from the cached list (seeded when empty) and writes it back.
    ///
    /// Returns `false` without writing when the id is absent.
    pub async fn apply_delete(&self, id: &str) -> Result<bool> {
        let mut products = self.list_products().await;
        if !product::remove_by_id(&mut products, id) {
            debug!("Product '{}' not in local listing", id);
            return Ok(false);
        }
        self.cache_products(&products).await?;
        Ok(true)
    }

    /// Removes an id from an existing cache only; never materializes the seed set.
    pub async fn prune_cached(&self, id: &str) -> Result<bool> {
        let Some(mut products) = self.cached_products().await else {
            return Ok(false);
        };
        if !product::remove_by_id(&mut products, id) {
            return Ok(false);
        }
        self.cache_products(&products).await?;
        Ok(true)
    }
}

#[async_trait]
impl CatalogBackend for LocalBackend {
    fn mode(&self) -> StorageMode {
        StorageMode::Local
    }

    async fn list_products(&self) -> Vec<Product> {
        self.cached_products().await.unwrap_or_else(seed_products)
    }

    async fn save_product(&self, product: &Product) -> Result<WriteOutcome> {
        self.apply_save(product).await?;
        Ok(WriteOutcome::Local)
    }

    async fn delete_product(&self, id: &str) -> Result<WriteOutcome> {
        if self.apply_delete(id).await? {
            Ok(WriteOutcome::Local)
        } else {
            Ok(WriteOutcome::NotFound)
        }
    }

    async fn list_prices(&self) -> Vec<GoldPrice> {
        self.cached_prices()
            .await
            .map_or_else(seed_prices, PriceSet::into_vec)
    }

    async fn replace_prices(&self, prices: &PriceSet) -> Result<WriteOutcome> {
        self.cache_prices(prices.as_slice()).await?;
        Ok(WriteOutcome::Local)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_product, setup_local_store};

    #[tokio::test]
    async fn test_first_save_materializes_seed_plus_product() -> Result<()> {
        let backend = LocalBackend::new(setup_local_store().await?);
        assert!(backend.cached_products().await.is_none());

        backend.save_product(&sample_product("new", "Ring")).await?;
        let cached = backend.cached_products().await.unwrap();
        assert_eq!(cached.len(), seed_products().len() + 1);
        assert_eq!(cached.last().unwrap().id, "new");
        Ok(())
    }

    #[tokio::test]
    async fn test_prune_cached_ignores_missing_cache() -> Result<()> {
        let backend = LocalBackend::new(setup_local_store().await?);
        assert!(!backend.prune_cached("1").await?);
        assert!(backend.cached_products().await.is_none());

        backend.cache_products(&[sample_product("1", "Ring")]).await?;
        assert!(backend.prune_cached("1").await?);
        assert!(backend.cached_products().await.unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_cache_reads_as_seed() -> Result<()> {
        let store = setup_local_store().await?;
        store.set(StoreKey::Products, "{broken").await?;
        store.set(StoreKey::Prices, "[{\"karat\": 19}]").await?;

        let backend = LocalBackend::new(store);
        assert_eq!(backend.list_products().await, seed_products());
        assert_eq!(backend.list_prices().await, seed_prices());
        Ok(())
    }

    #[tokio::test]
    async fn test_incomplete_price_cache_reads_as_seed() -> Result<()> {
        let store = setup_local_store().await?;
        let backend = LocalBackend::new(store.clone());

        store.set(StoreKey::Prices, "[]").await?;
        assert!(backend.cached_prices().await.is_none());
        assert_eq!(backend.list_prices().await, seed_prices());

        let mut partial = seed_prices();
        partial.pop();
        store.save(StoreKey::Prices, &partial).await?;
        assert_eq!(backend.list_prices().await, seed_prices());
        Ok(())
    }

    #[tokio::test]
    async fn test_replace_prices_overwrites_cache() -> Result<()> {
        let backend = LocalBackend::new(setup_local_store().await?);
        let mut board = seed_prices();
        board[0].sell += 100;
        let set = PriceSet::new(board.clone()).unwrap();

        assert_eq!(backend.replace_prices(&set).await?, WriteOutcome::Local);
        assert_eq!(backend.list_prices().await, board);
        Ok(())
    }
}
