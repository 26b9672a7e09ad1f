use thiserror::Error;

/// Failure talking to the remote document store.
///
/// `Clone` so a degraded write can carry its cause back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Connection or request failure
    #[error("network error: {0}")]
    Transport(String),
    /// Request exceeded the client timeout
    #[error("timeout")]
    Timeout,
    /// Credentials rejected (401/403)
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// Addressed document does not exist
    #[error("document not found: {path}")]
    NotFound { path: String },
    /// Any other non-success status
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    /// Value has no lossless Firestore representation
    #[error("unencodable value: {0}")]
    Encode(String),
    /// Response body could not be decoded
    #[error("malformed document: {0}")]
    Decode(String),
    /// No usable remote store
    #[error("remote store unavailable")]
    Unavailable,
}

impl RemoteError {
    /// True when the target document does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub(crate) fn map_reqwest_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else if e.is_decode() {
        RemoteError::Decode(e.to_string())
    } else {
        RemoteError::Transport(e.to_string())
    }
}
