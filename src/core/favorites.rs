//! Favorites - the set of product ids a shopper has starred.
//!
//! Stored under the `favorites` key as a JSON array. Every change rewrites the
//! whole set.

use crate::{
    errors::Result,
    storage::{LocalStore, StoreKey},
};
use tracing::debug;

/// Favorite product ids in the order they were added.
pub async fn list_favorites(store: &LocalStore) -> Vec<String> {
    store
        .load::<Vec<String>>(StoreKey::Favorites)
        .await
        .unwrap_or_default()
}

/// Whether `product_id` is a favorite.
pub async fn is_favorite(store: &LocalStore, product_id: &str) -> bool {
    list_favorites(store).await.iter().any(|id| id == product_id)
}

/// Adds `product_id` if absent, removes it if present, and returns the new set.
///
/// # Errors
/// Returns an error if the updated set cannot be written.
pub async fn toggle_favorite(store: &LocalStore, product_id: &str) -> Result<Vec<String>> {
    let mut favorites = list_favorites(store).await;

    if favorites.iter().any(|id| id == product_id) {
        favorites.retain(|id| id != product_id);
        debug!("Removed '{}' from favorites", product_id);
    } else {
        favorites.push(product_id.to_string());
        debug!("Added '{}' to favorites", product_id);
    }

    store.save(StoreKey::Favorites, &favorites).await?;
    Ok(favorites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_local_store;

    #[tokio::test]
    async fn test_toggle_adds_then_removes() -> Result<()> {
        let store = setup_local_store().await?;

        assert_eq!(toggle_favorite(&store, "3").await?, vec!["3".to_string()]);
        assert!(is_favorite(&store, "3").await);

        assert!(toggle_favorite(&store, "3").await?.is_empty());
        assert!(!is_favorite(&store, "3").await);
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_is_involutive_over_existing_set() -> Result<()> {
        let store = setup_local_store().await?;
        toggle_favorite(&store, "1").await?;
        toggle_favorite(&store, "2").await?;
        let base = list_favorites(&store).await;

        for id in ["2", "5"] {
            let was_member = base.iter().any(|f| f == id);
            toggle_favorite(&store, id).await?;
            toggle_favorite(&store, id).await?;
            assert_eq!(is_favorite(&store, id).await, was_member);
        }
        assert!(is_favorite(&store, "1").await);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_favorites_start_empty() -> Result<()> {
        let store = setup_local_store().await?;
        store.set(StoreKey::Favorites, "\"1,2,3\"").await?;

        assert!(list_favorites(&store).await.is_empty());
        assert_eq!(toggle_favorite(&store, "4").await?, vec!["4".to_string()]);
        Ok(())
    }
}
