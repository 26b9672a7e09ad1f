//! On-device key-value store backed by the `local_entries` table.
//!
//! Raw access (`get`/`set`/`remove`) propagates database errors. The typed
//! `load` helper never fails: a missing row, a database error or a value that
//! no longer parses all read as `None`, so callers fall back to defaults.

use super::StoreKey;
use crate::{
    entities::{LocalEntry, local_entry},
    errors::Result,
};
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

/// Handle to the local key-value store. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LocalStore {
    db: DatabaseConnection,
}

impl LocalStore {
    /// Wraps an open connection whose tables already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the database at `database_url` and creates the table if needed.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let db = crate::config::database::create_connection(database_url).await?;
        crate::config::database::create_tables(&db).await?;
        Ok(Self::new(db))
    }

    /// Reads the raw value stored under `key`.
    #[instrument(skip(self))]
    pub async fn get(&self, key: StoreKey) -> Result<Option<String>> {
        let value = LocalEntry::find_by_id(key.as_str())
            .one(&self.db)
            .await?
            .map(|entry| entry.value);
        debug!("Local read of '{}': {} bytes", key, value.as_ref().map_or(0, String::len));
        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    #[instrument(skip(self, value))]
    pub async fn set(&self, key: StoreKey, value: &str) -> Result<()> {
        let entry = local_entry::ActiveModel {
            key: Set(key.as_str().to_string()),
            value: Set(value.to_string()),
            updated_at: Set(chrono::Utc::now().naive_utc()),
        };

        LocalEntry::insert(entry)
            .on_conflict(
                OnConflict::column(local_entry::Column::Key)
                    .update_columns([local_entry::Column::Value, local_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;
        debug!("Local write of '{}': {} bytes", key, value.len());
        Ok(())
    }

    /// Deletes `key`. Returns whether a value was present.
    #[instrument(skip(self))]
    pub async fn remove(&self, key: StoreKey) -> Result<bool> {
        let result = LocalEntry::delete_by_id(key.as_str()).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Reads and parses the value under `key`.
    ///
    /// Absent, unreadable and unparseable values all return `None`.
    pub async fn load<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let raw = match self.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Local read of '{}' failed, treating as absent: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Local value under '{}' is corrupt, treating as absent: {}", key, e);
                None
            }
        }
    }

    /// Serializes `value` and writes it under `key`.
    pub async fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}
