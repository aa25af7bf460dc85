//! Request and response payloads exchanged with the question-answering backend.
//!
//! All response fields the backend may omit are modelled as optional (or
//! defaulted) so a sparse body still decodes.

use super::error::ValidationError;
use crate::config::expand_home;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INDEX_DEFAULT_PATH: &str = "/api/index-default";
pub const UPLOAD_AND_INDEX_PATH: &str = "/api/upload-and-index";
pub const ASK_PATH: &str = "/api/ask";

/// Number of retrieved passages requested for every question.
pub const TOP_K: u32 = 5;

/// Multipart field name the backend expects the document under.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskRequest {
    pub query: String,
    pub top_k: u32,
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: TOP_K,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl AskResponse {
    /// Sources joined the way the answer view shows them.
    pub fn sources_line(&self) -> String {
        let sources = self.sources.as_deref().unwrap_or_default();
        format!("Sources: {}", sources.join(" | "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndexResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response. FastAPI validation failures carry a list
/// here instead of a string, so the raw JSON value is kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A question that survived local validation: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A document picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name);
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }
}

/// Resolve the upload path box contents into a file path. An empty box
/// means nothing was selected. A leading `~/` expands to the home directory.
pub fn parse_upload_path(raw: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NoFileSelected);
    }
    Ok(expand_home(trimmed))
}

fn mime_for(file_name: &str) -> &'static str {
    let is_pdf = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        "application/pdf"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ask_request_body() {
        let body = serde_json::to_value(AskRequest::new("What is GDP?")).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "What is GDP?", "top_k": 5 }));
    }

    #[test]
    fn test_sources_line() {
        let resp: AskResponse = serde_json::from_str(
            r#"{"answer":"Paris is the capital.","sources":["doc1.pdf#p3","doc1.pdf#p5"]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "Paris is the capital.");
        assert_eq!(resp.sources_line(), "Sources: doc1.pdf#p3 | doc1.pdf#p5");

        let bare: AskResponse = serde_json::from_str(r#"{"answer":"x"}"#).unwrap();
        assert_eq!(bare.sources_line(), "Sources: ");

        let null: AskResponse = serde_json::from_str(r#"{"answer":"x","sources":null}"#).unwrap();
        assert_eq!(null.sources_line(), "Sources: ");
    }

    #[test]
    fn test_missing_answer_decodes_empty() {
        let resp: AskResponse = serde_json::from_str(r#"{"sources":[]}"#).unwrap();
        assert_eq!(resp.answer, "");
    }

    #[test]
    fn test_error_detail_text() {
        let e: ErrorResponse = serde_json::from_str(r#"{"detail":"file too large"}"#).unwrap();
        assert_eq!(e.detail_text().as_deref(), Some("file too large"));

        let e: ErrorResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(e.detail_text(), None);

        let e: ErrorResponse = serde_json::from_str(r#"{"detail":""}"#).unwrap();
        assert_eq!(e.detail_text(), None);

        let e: ErrorResponse = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert_eq!(e.detail_text().as_deref(), Some(r#"[{"msg":"field required"}]"#));
    }

    #[test]
    fn test_question_parse() {
        assert_eq!(Question::parse(""), Err(ValidationError::EmptyQuestion));
        assert_eq!(Question::parse(" \t\n "), Err(ValidationError::EmptyQuestion));
        assert_eq!(Question::parse("  What is GDP?  ").unwrap().as_str(), "What is GDP?");
    }

    #[test]
    fn test_parse_upload_path() {
        assert_eq!(parse_upload_path("   "), Err(ValidationError::NoFileSelected));
        assert_eq!(
            parse_upload_path(" ./data/report.pdf ").unwrap(),
            PathBuf::from("./data/report.pdf")
        );
    }

    #[tokio::test]
    async fn test_upload_file_read_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imf.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let file = UploadFile::read(&path).await.unwrap();
        assert_eq!(file.file_name, "imf.pdf");
        assert_eq!(file.mime, "application/pdf");
        assert_eq!(file.bytes, b"%PDF".to_vec());

        assert!(UploadFile::read(&dir.path().join("missing.pdf")).await.is_err());
    }

    #[test]
    fn test_upload_mime() {
        assert_eq!(UploadFile::new("report.PDF", vec![]).mime, "application/pdf");
        assert_eq!(UploadFile::new("notes.txt", vec![]).mime, "application/octet-stream");
        assert_eq!(UploadFile::new("noext", vec![]).mime, "application/octet-stream");
    }
}
