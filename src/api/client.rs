//! Typed client for the three backend endpoints.

use super::error::ApiError;
use super::transport::{RawResponse, RequestBody, Transport};
use super::types::*;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};

/// Cheap to clone; every clone shares one transport.
#[derive(Clone)]
pub struct QaClient {
    transport: Arc<dyn Transport>,
}

impl QaClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Ask the backend to index its preconfigured document.
    pub async fn index_default(&self) -> Result<IndexResponse, ApiError> {
        info!(path = INDEX_DEFAULT_PATH, "indexing default document");
        let raw = self
            .transport
            .post(INDEX_DEFAULT_PATH, RequestBody::Empty)
            .await?;
        let resp: IndexResponse = decode(INDEX_DEFAULT_PATH, raw)?;
        log_indexed(INDEX_DEFAULT_PATH, &resp);
        Ok(resp)
    }

    /// Upload a document and have the backend index it.
    pub async fn upload_and_index(&self, file: UploadFile) -> Result<IndexResponse, ApiError> {
        info!(
            path = UPLOAD_AND_INDEX_PATH,
            file = %file.file_name,
            bytes = file.bytes.len(),
            "uploading document"
        );
        let body = RequestBody::Multipart {
            field: UPLOAD_FIELD,
            file,
        };
        let raw = self.transport.post(UPLOAD_AND_INDEX_PATH, body).await?;
        let resp: IndexResponse = decode(UPLOAD_AND_INDEX_PATH, raw)?;
        log_indexed(UPLOAD_AND_INDEX_PATH, &resp);
        Ok(resp)
    }

    /// Run a question against the indexed content. `query` is sent as-is;
    /// callers trim and validate it first.
    pub async fn ask(&self, query: &str) -> Result<AskResponse, ApiError> {
        info!(path = ASK_PATH, query_len = query.len(), "asking question");
        let body = serde_json::to_value(AskRequest::new(query))?;
        let raw = self.transport.post(ASK_PATH, RequestBody::Json(body)).await?;
        decode(ASK_PATH, raw)
    }
}

fn log_indexed(path: &str, resp: &IndexResponse) {
    info!(
        path,
        status = resp.status.as_deref().unwrap_or("-"),
        message = resp.message.as_deref().unwrap_or("-"),
        "index request succeeded"
    );
}

fn decode<T: DeserializeOwned>(path: &str, raw: RawResponse) -> Result<T, ApiError> {
    if raw.is_success() {
        return Ok(serde_json::from_slice(&raw.body)?);
    }
    let detail = serde_json::from_slice::<ErrorResponse>(&raw.body)
        .ok()
        .and_then(|e| e.detail_text());
    warn!(path, status = raw.status, detail = ?detail, "backend returned an error");
    Err(ApiError::Status {
        status: raw.status,
        detail,
    })
}
