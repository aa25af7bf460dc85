//! HTTP transport seam.
//!
//! [`QaClient`](super::client::QaClient) only needs "POST this body to that
//! path and give me the status and raw bytes back", so that is all the
//! [`Transport`] trait asks for. [`HttpTransport`] implements it with
//! `reqwest`; tests swap in a recording fake.

use super::error::ApiError;
use super::types::UploadFile;
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

/// Body of an outgoing POST.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart { field: &'static str, file: UploadFile },
}

/// Status code and body bytes of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, ApiError>;
}

/// `reqwest`-backed transport rooted at the backend's origin.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ragdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, ApiError> {
        let url = self.url(path);
        let request = self.http.post(&url);
        let request = match body {
            RequestBody::Empty => request,
            // `.json()` sets `Content-Type: application/json`
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart { field, file } => {
                let part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(file.mime)?;
                request.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(
            url = %url,
            status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let t = HttpTransport::new("http://localhost:8000/").unwrap();
        assert_eq!(t.base_url(), "http://localhost:8000");
        assert_eq!(t.url("/api/ask"), "http://localhost:8000/api/ask");
    }

    #[test]
    fn test_is_success() {
        let ok = RawResponse { status: 204, body: vec![] };
        let bad = RawResponse { status: 400, body: vec![] };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
