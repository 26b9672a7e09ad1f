//! Display preferences - a singleton overwritten wholesale.

use crate::{
    errors::Result,
    models::AppPreferences,
    storage::{LocalStore, StoreKey},
};

/// Stored preferences, or the defaults when absent or unreadable.
pub async fn get_preferences(store: &LocalStore) -> AppPreferences {
    store
        .load::<AppPreferences>(StoreKey::Preferences)
        .await
        .unwrap_or_default()
}

/// Validates and overwrites the stored preferences.
///
/// # Errors
/// Returns `Error::InvalidPreferences` for an out-of-range opacity, or a
/// database error if the write fails.
pub async fn save_preferences(store: &LocalStore, prefs: &AppPreferences) -> Result<()> {
    prefs.validate()?;
    store.save(StoreKey::Preferences, prefs).await
}
