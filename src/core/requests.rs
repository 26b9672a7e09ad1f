//! Client requests - service tickets kept on the device, newest first.

use crate::{
    errors::Result,
    models::ClientRequest,
    storage::{LocalStore, StoreKey},
};
use tracing::info;

/// Saved requests, most recent first.
pub async fn list_requests(store: &LocalStore) -> Vec<ClientRequest> {
    store
        .load::<Vec<ClientRequest>>(StoreKey::Requests)
        .await
        .unwrap_or_default()
}

/// Prepends `request` and returns the new list.
///
/// # Errors
/// Returns an error if the updated list cannot be written.
pub async fn save_request(store: &LocalStore, request: ClientRequest) -> Result<Vec<ClientRequest>> {
    let mut requests = list_requests(store).await;
    info!("Saving {:?} request '{}'", request.kind, request.id);
    requests.insert(0, request);
    store.save(StoreKey::Requests, &requests).await?;
    Ok(requests)
}

/// Removes the request with `request_id` and returns the remaining list.
///
/// Unknown ids leave the list unchanged.
///
/// # Errors
/// Returns an error if the updated list cannot be written.
pub async fn delete_request(store: &LocalStore, request_id: &str) -> Result<Vec<ClientRequest>> {
    let mut requests = list_requests(store).await;
    requests.retain(|r| r.id != request_id);
    store.save(StoreKey::Requests, &requests).await?;
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequestDraft, RequestKind};
    use crate::test_utils::setup_local_store;

    fn request(id: &str, kind: RequestKind) -> ClientRequest {
        ClientRequest {
            id: id.to_string(),
            ..ClientRequest::from_draft(RequestDraft {
                kind,
                ..RequestDraft::default()
            })
        }
    }

    #[tokio::test]
    async fn test_requests_are_newest_first() -> Result<()> {
        let store = setup_local_store().await?;

        save_request(&store, request("r1", RequestKind::Custom)).await?;
        save_request(&store, request("r2", RequestKind::Repair)).await?;

        let requests = list_requests(&store).await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].id, "r2");
        assert_eq!(requests[1].id, "r1");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_request_by_id() -> Result<()> {
        let store = setup_local_store().await?;
        save_request(&store, request("r1", RequestKind::Custom)).await?;
        save_request(&store, request("r2", RequestKind::Exchange)).await?;

        let remaining = delete_request(&store, "r1").await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "r2");

        let unchanged = delete_request(&store, "missing").await?;
        assert_eq!(unchanged, remaining);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_requests_read_as_empty() -> Result<()> {
        let store = setup_local_store().await?;
        store.set(StoreKey::Requests, "[{\"id\": 1}]").await?;
        assert!(list_requests(&store).await.is_empty());
        Ok(())
    }
}
