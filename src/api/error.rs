use thiserror::Error;

/// Reasons a validated request can fail after it has been dispatched.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{}", status_fallback(.status))]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Text shown after `"Error: "` in a status region. Backend-provided
    /// detail wins over the generic message.
    pub fn display_detail(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn status_text(&self) -> String {
        format!("Error: {}", self.display_detail())
    }
}

fn status_fallback(status: &u16) -> String {
    match reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("request failed with HTTP {} {}", status, reason),
        None => format!("request failed with HTTP {}", status),
    }
}

/// Local input problems caught before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please type a question.")]
    EmptyQuestion,
    #[error("Please select a PDF file.")]
    NoFileSelected,
}
