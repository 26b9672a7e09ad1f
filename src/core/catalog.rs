//! Catalog facade - the single data-access entry point.
//!
//! The facade owns one [`CatalogBackend`] chosen when it is built: a
//! [`LocalBackend`] when no usable remote credentials exist, otherwise a
//! [`RemoteBackend`] that degrades to the local cache on failure. Callers see
//! the same API and the same record shapes in both modes.
//!
//! Reads never fail; they end in remote data, the local cache or the seed set.
//! Writes report where the data landed through [`WriteOutcome`]. The only
//! errors a write returns are input validation failures and a failure of the
//! local store itself.

use super::{LocalBackend, RemoteBackend, favorites, preferences, requests};
use crate::{
    config::RemoteSettings,
    errors::Result,
    models::{AppPreferences, ClientRequest, GoldPrice, PriceSet, Product, RequestDraft},
    remote::{DocumentStore, FirestoreClient, RemoteError},
    storage::LocalStore,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Which store the facade routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Hosted document store first, local cache on failure
    Remote,
    /// Local store only
    Local,
}

/// Where a write ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Persisted to the remote store
    Remote,
    /// Persisted to the local store
    Local,
    /// The remote write failed and the change was saved locally instead.
    /// The user should be told their change is not shared yet.
    LocalOnly {
        /// Why the remote write failed
        cause: RemoteError,
    },
    /// Delete target did not exist anywhere; nothing changed
    NotFound,
}

impl WriteOutcome {
    /// True when a remote write was attempted and degraded to local-only.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::LocalOnly { .. })
    }
}

/// A saved record together with where it was stored
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    /// The record as persisted (with any assigned id)
    pub record: T,
    /// Where it was persisted
    pub outcome: WriteOutcome,
}

/// Product and price storage strategy.
///
/// Implementations return domain records only; store-specific failures are
/// handled inside and never surface through this trait.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Mode this backend implements
    fn mode(&self) -> StorageMode;

    /// Full product listing
    async fn list_products(&self) -> Vec<Product>;

    /// Upserts a product by id
    async fn save_product(&self, product: &Product) -> Result<WriteOutcome>;

    /// Removes a product by id
    async fn delete_product(&self, id: &str) -> Result<WriteOutcome>;

    /// Current price board
    async fn list_prices(&self) -> Vec<GoldPrice>;

    /// Replaces the whole price board
    async fn replace_prices(&self, prices: &PriceSet) -> Result<WriteOutcome>;
}

/// The data-access facade
#[derive(Clone)]
pub struct Catalog {
    backend: Arc<dyn CatalogBackend>,
    local: LocalStore,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("mode", &self.backend.mode())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Builds a facade over an explicit backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>, local: LocalStore) -> Self {
        info!("Catalog running in {:?} mode", backend.mode());
        Self { backend, local }
    }

    /// Local-only facade (demo/offline mode).
    #[must_use]
    pub fn local(local: LocalStore) -> Self {
        Self::new(Arc::new(LocalBackend::new(local.clone())), local)
    }

    /// Remote-first facade over any document store.
    #[must_use]
    pub fn remote(remote: Arc<dyn DocumentStore>, local: LocalStore) -> Self {
        let backend = RemoteBackend::new(remote, LocalBackend::new(local.clone()));
        Self::new(Arc::new(backend), local)
    }

    /// Chooses the mode once from the remote settings.
    ///
    /// Missing or placeholder credentials select local mode silently; a
    /// client that cannot be built is logged and also selects local mode.
    #[must_use]
    pub fn from_settings(settings: &RemoteSettings, local: LocalStore) -> Self {
        if !settings.is_configured() {
            info!("Remote store not configured, using local storage");
            return Self::local(local);
        }
        match FirestoreClient::from_settings(settings) {
            Ok(client) => Self::remote(Arc::new(client), local),
            Err(e) => {
                warn!("Could not build remote client, using local storage: {}", e);
                Self::local(local)
            }
        }
    }

    /// Active storage mode
    #[must_use]
    pub fn mode(&self) -> StorageMode {
        self.backend.mode()
    }

    /// Local store handle
    #[must_use]
    pub const fn local_store(&self) -> &LocalStore {
        &self.local
    }

    // --- Products ---

    /// All products. Falls back to the local cache, then to the seed set.
    pub async fn list_products(&self) -> Vec<Product> {
        self.backend.list_products().await
    }

    /// Creates or replaces a product by id.
    ///
    /// A product without an id gets a timestamp-derived one.
    ///
    /// # Errors
    /// Returns `Error::InvalidProduct` for invalid input, or a database error
    /// when the local store could not be written either.
    pub async fn save_product(&self, mut product: Product) -> Result<Saved<Product>> {
        product.validate()?;
        product.ensure_id();
        let outcome = self.backend.save_product(&product).await?;
        info!("Saved product '{}' ({:?})", product.id, outcome);
        Ok(Saved {
            record: product,
            outcome,
        })
    }

    /// Deletes a product. Deleting an unknown id is a no-op reported as `NotFound`.
    pub async fn delete_product(&self, id: &str) -> Result<WriteOutcome> {
        let outcome = self.backend.delete_product(id).await?;
        info!("Deleted product '{}' ({:?})", id, outcome);
        Ok(outcome)
    }

    // --- Prices ---

    /// Current price board. Falls back to the local cache, then to the seed set.
    pub async fn list_prices(&self) -> Vec<GoldPrice> {
        self.backend.list_prices().await
    }

    /// Replaces the whole price board.
    pub async fn replace_prices(&self, prices: PriceSet) -> Result<WriteOutcome> {
        let outcome = self.backend.replace_prices(&prices).await?;
        info!("Replaced gold prices ({:?})", outcome);
        Ok(outcome)
    }

    // --- Local-only namespaces ---

    /// Favorite product ids
    pub async fn favorites(&self) -> Vec<String> {
        favorites::list_favorites(&self.local).await
    }

    /// Whether a product is a favorite
    pub async fn is_favorite(&self, product_id: &str) -> bool {
        favorites::is_favorite(&self.local, product_id).await
    }

    /// Adds or removes a favorite, returning the new set
    pub async fn toggle_favorite(&self, product_id: &str) -> Result<Vec<String>> {
        favorites::toggle_favorite(&self.local, product_id).await
    }

    /// Saved requests, newest first
    pub async fn requests(&self) -> Vec<ClientRequest> {
        requests::list_requests(&self.local).await
    }

    /// Stamps and stores a new request, returning it
    pub async fn submit_request(&self, draft: RequestDraft) -> Result<ClientRequest> {
        let request = ClientRequest::from_draft(draft);
        requests::save_request(&self.local, request.clone()).await?;
        Ok(request)
    }

    /// Removes a request, returning the remaining list
    pub async fn delete_request(&self, request_id: &str) -> Result<Vec<ClientRequest>> {
        requests::delete_request(&self.local, request_id).await
    }

    /// Display preferences
    pub async fn preferences(&self) -> AppPreferences {
        preferences::get_preferences(&self.local).await
    }

    /// Overwrites display preferences
    pub async fn save_preferences(&self, prefs: &AppPreferences) -> Result<()> {
        preferences::save_preferences(&self.local, prefs).await
    }
}
