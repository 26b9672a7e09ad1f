//! Firestore REST client.

use super::{
    Document, DocumentStore, Fields, RemoteError,
    codec::{decode_fields, encode_fields},
    error::map_reqwest_error,
};
use crate::config::RemoteSettings;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

/// Documents returned per list call; the client keeps paging until exhausted.
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    next_page_token: Option<String>,
}

impl RawDocument {
    fn into_document(self) -> Result<Document, RemoteError> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| RemoteError::Decode(format!("bad document name '{}'", self.name)))?
            .to_string();
        Ok(Document {
            id,
            fields: decode_fields(&self.fields)?,
        })
    }
}

/// Firestore client for one project's default database
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: Client,
    documents_url: String,
    api_key: String,
}

impl FirestoreClient {
    /// Builds a client from settings.
    ///
    /// # Errors
    /// Returns `RemoteError::Unavailable` when credentials are missing or
    /// placeholders, `RemoteError::Transport` if the HTTP client cannot be built.
    pub fn from_settings(settings: &RemoteSettings) -> Result<Self, RemoteError> {
        if !settings.is_configured() {
            return Err(RemoteError::Unavailable);
        }
        let (Some(project_id), Some(api_key)) = (&settings.project_id, &settings.api_key) else {
            return Err(RemoteError::Unavailable);
        };

        let http = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("jewel-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            documents_url: documents_url(&settings.base_url, project_id.trim()),
            api_key: api_key.trim().to_string(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.documents_url)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.documents_url)
    }
}

fn documents_url(base_url: &str, project_id: &str) -> String {
    format!(
        "{}/projects/{project_id}/databases/(default)/documents",
        base_url.trim_end_matches('/')
    )
}

/// Maps a non-success status to the error callers branch on.
fn classify(status: StatusCode, path: &str, body: String) -> RemoteError {
    match status {
        StatusCode::NOT_FOUND => RemoteError::NotFound {
            path: path.to_string(),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::PermissionDenied(body),
        s => RemoteError::Http {
            status: s.as_u16(),
            body,
        },
    }
}

async fn check_status(res: Response, path: &str) -> Result<Response, RemoteError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(classify(status, path, body))
}

/// Turns a not-found failure into `Ok(None)`.
fn missing_as_none<T>(result: Result<T, RemoteError>) -> Result<Option<T>, RemoteError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Requests pages until one comes back without a continuation token.
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<Document>, RemoteError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListResponse, RemoteError>>,
{
    let mut documents = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch_page(page_token.take()).await?;
        for raw in page.documents {
            documents.push(raw.into_document()?);
        }

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(documents)
}

impl FirestoreClient {
    async fn fetch_page(
        &self,
        url: &str,
        collection: &str,
        page_token: Option<String>,
    ) -> Result<ListResponse, RemoteError> {
        let mut request = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("pageSize", PAGE_SIZE)]);
        if let Some(token) = &page_token {
            request = request.query(&[("pageToken", token.as_str())]);
        }

        let res = request.send().await.map_err(map_reqwest_error)?;
        check_status(res, collection)
            .await?
            .json()
            .await
            .map_err(map_reqwest_error)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    fn backend_tag(&self) -> &'static str {
        "firestore"
    }

    #[instrument(skip(self))]
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError> {
        let url = self.collection_url(collection);
        let url = url.as_str();
        let client = self;

        let documents =
            collect_pages(move |token| client.fetch_page(url, collection, token)).await?;

        debug!("Listed {} documents from '{}'", documents.len(), collection);
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, RemoteError> {
        let res = self
            .http
            .get(self.document_url(collection, id))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let path = format!("{collection}/{id}");
        let Some(res) = missing_as_none(check_status(res, &path).await)? else {
            return Ok(None);
        };

        let raw: RawDocument = res.json().await.map_err(map_reqwest_error)?;
        raw.into_document().map(Some)
    }

    #[instrument(skip(self, fields))]
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), RemoteError> {
        let body = json!({ "fields": encode_fields(&fields)? });
        let res = self
            .http
            .patch(self.document_url(collection, id))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        check_status(res, &format!("{collection}/{id}")).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), RemoteError> {
        let res = self
            .http
            .delete(self.document_url(collection, id))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        check_status(res, &format!("{collection}/{id}")).await?;
        Ok(())
    }
}
