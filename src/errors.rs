//! Unified error type for the catalog core.
//!
//! Store-specific failures are converted into these variants at the module that
//! talks to the store. The facade never hands a raw `DbErr` or HTTP error to its
//! caller; remote failures reach callers only inside a `WriteOutcome`.

use crate::remote::RemoteError;
use thiserror::Error;

/// Errors produced by the catalog core
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// Local SQLite store failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote document store failure
    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),

    /// Product failed validation before being written
    #[error("Invalid product: {message}")]
    InvalidProduct {
        /// Which rule was broken
        message: String,
    },

    /// Price set is not exactly one record per karat tier
    #[error("Invalid price set: {message}")]
    InvalidPrices {
        /// Which rule was broken
        message: String,
    },

    /// Preferences outside their allowed range
    #[error("Invalid preferences: {message}")]
    InvalidPreferences {
        /// Which rule was broken
        message: String,
    },

    /// Karat value other than 18, 21 or 24
    #[error("Unsupported karat: {value}")]
    InvalidKarat {
        /// The rejected value
        value: u16,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
