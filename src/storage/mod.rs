//! Local persistence - the on-device key-value store and its fixed key namespace.

mod local;

pub use local::LocalStore;

use std::fmt;

/// The fixed set of keys the local store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// JSON array of favorite product ids
    Favorites,
    /// JSON array of client requests, newest first
    Requests,
    /// JSON object with display preferences
    Preferences,
    /// JSON array of products (fallback cache)
    Products,
    /// JSON array of gold prices (fallback cache)
    Prices,
}

impl StoreKey {
    /// Key as stored in the table
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Requests => "requests",
            Self::Preferences => "preferences",
            Self::Products => "products",
            Self::Prices => "prices",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
