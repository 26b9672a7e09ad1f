//! Local database configuration.
//!
//! Handles the `SQLite` connection backing the on-device key-value store and
//! creates its single table from the entity definition using `SeaORM`'s
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! struct without hand-written SQL.

use crate::entities::LocalEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;

/// Establishes a connection to the local database.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_sqlite_parent_dir(database_url)?;
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the key-value table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut local_entries = schema.create_table_from_entity(LocalEntry);
    local_entries.if_not_exists();

    db.execute(builder.build(&local_entries)).await?;

    Ok(())
}

/// Creates the directory holding a file-backed `SQLite` database.
///
/// In-memory URLs and non-sqlite URLs are left alone.
fn ensure_sqlite_parent_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or_default();
    if file.is_empty() || file.contains(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(file).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
