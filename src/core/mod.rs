//! Core logic - the catalog facade, its storage strategies and the
//! local-only services (favorites, requests, preferences).

pub mod admin;
pub mod catalog;
pub mod favorites;
mod local_backend;
pub mod preferences;
mod remote_backend;
pub mod requests;
pub mod seed;

pub use admin::AdminGate;
pub use catalog::{Catalog, CatalogBackend, Saved, StorageMode, WriteOutcome};
pub use local_backend::LocalBackend;
pub use remote_backend::RemoteBackend;
