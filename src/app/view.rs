//! Display regions and how request outcomes are rendered into them.
//!
//! [`View`] holds the text of the four regions the dispatcher writes to. Each
//! of the two independently updated areas (index status, and the ask status
//! with its answer and sources) carries a ticket. Starting a request bumps the
//! area's ticket, and a completion only lands if it still holds the latest one.
//! A slow response to an older click therefore never overwrites a newer one.

use crate::api::error::ApiError;
use crate::api::types::{AskResponse, IndexResponse};

pub const INDEXING_DEFAULT: &str = "Indexing default PDF...";
pub const UPLOADING: &str = "Uploading & indexing...";
pub const THINKING: &str = "Thinking...";
pub const DONE: &str = "Done.";

/// Monotonic per-region request number.
pub type Ticket = u64;

/// Which request last wrote to the index status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Default,
    Upload,
}

impl IndexKind {
    pub fn in_progress_text(self) -> &'static str {
        match self {
            IndexKind::Default => INDEXING_DEFAULT,
            IndexKind::Upload => UPLOADING,
        }
    }

    pub fn fallback_text(self) -> &'static str {
        match self {
            IndexKind::Default => "Indexed.",
            IndexKind::Upload => "Uploaded & indexed.",
        }
    }
}

#[derive(Debug, Default)]
pub struct View {
    pub index_status: String,
    pub ask_status: String,
    pub answer: String,
    pub sources: String,
    index_ticket: Ticket,
    ask_ticket: Ticket,
    index_in_flight: bool,
    ask_in_flight: bool,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_busy(&self) -> bool {
        self.index_in_flight
    }

    pub fn ask_busy(&self) -> bool {
        self.ask_in_flight
    }

    /// Show the in-progress text for an index request and claim a ticket for it.
    pub fn begin_index(&mut self, kind: IndexKind) -> Ticket {
        self.index_ticket += 1;
        self.index_in_flight = true;
        self.index_status = kind.in_progress_text().to_string();
        self.index_ticket
    }

    /// Blank answer and sources, show the thinking text, and claim a ticket.
    pub fn begin_ask(&mut self) -> Ticket {
        self.ask_ticket += 1;
        self.ask_in_flight = true;
        self.ask_status = THINKING.to_string();
        self.answer.clear();
        self.sources.clear();
        self.ask_ticket
    }

    /// Apply a finished index request. Returns `false` if a newer request
    /// has since taken the region and the outcome was dropped.
    pub fn finish_index(
        &mut self,
        ticket: Ticket,
        kind: IndexKind,
        result: &Result<IndexResponse, ApiError>,
    ) -> bool {
        if ticket != self.index_ticket {
            return false;
        }
        self.index_in_flight = false;
        self.index_status = index_status_text(kind, result);
        true
    }

    /// Apply a finished ask request. Same staleness rule as [`View::finish_index`].
    pub fn finish_ask(&mut self, ticket: Ticket, result: &Result<AskResponse, ApiError>) -> bool {
        if ticket != self.ask_ticket {
            return false;
        }
        self.ask_in_flight = false;
        match result {
            Ok(resp) => {
                self.ask_status = DONE.to_string();
                self.answer = resp.answer.clone();
                self.sources = resp.sources_line();
            }
            Err(e) => {
                // answer and sources stay blank from begin_ask
                self.ask_status = e.status_text();
            }
        }
        true
    }

    /// Validation prompts write straight to the status region without
    /// touching tickets, so an outstanding request can still land.
    pub fn prompt_index(&mut self, text: impl Into<String>) {
        self.index_status = text.into();
    }

    pub fn prompt_ask(&mut self, text: impl Into<String>) {
        self.ask_status = text.into();
    }

    pub fn clear_answer(&mut self) {
        self.answer.clear();
        self.sources.clear();
    }
}

pub fn index_status_text(kind: IndexKind, result: &Result<IndexResponse, ApiError>) -> String {
    match result {
        Ok(resp) => match resp.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => kind.fallback_text().to_string(),
        },
        Err(e) => e.status_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ask_ok(answer: &str, sources: Option<Vec<&str>>) -> Result<AskResponse, ApiError> {
        Ok(AskResponse {
            answer: answer.to_string(),
            sources: sources.map(|s| s.into_iter().map(String::from).collect()),
        })
    }

    #[test]
    fn test_ask_success_fills_answer_and_sources() {
        let mut view = View::new();
        let t = view.begin_ask();
        assert_eq!(view.ask_status, "Thinking...");
        assert!(view.ask_busy());

        let applied = view.finish_ask(
            t,
            &ask_ok("Paris is the capital.", Some(vec!["doc1.pdf#p3", "doc1.pdf#p5"])),
        );
        assert!(applied);
        assert_eq!(view.ask_status, "Done.");
        assert_eq!(view.answer, "Paris is the capital.");
        assert_eq!(view.sources, "Sources: doc1.pdf#p3 | doc1.pdf#p5");
        assert!(!view.ask_busy());
    }

    #[test]
    fn test_ask_without_sources() {
        let mut view = View::new();
        let t = view.begin_ask();
        view.finish_ask(t, &ask_ok("42", None));
        assert_eq!(view.sources, "Sources: ");
    }

    #[test]
    fn test_begin_ask_clears_stale_answer() {
        let mut view = View::new();
        let t = view.begin_ask();
        view.finish_ask(t, &ask_ok("old", Some(vec!["p1"])));

        let t = view.begin_ask();
        assert_eq!(view.answer, "");
        assert_eq!(view.sources, "");

        view.finish_ask(
            t,
            &Err(ApiError::Status {
                status: 400,
                detail: Some("Index not built yet.".into()),
            }),
        );
        assert_eq!(view.ask_status, "Error: Index not built yet.");
        assert_eq!(view.answer, "");
        assert_eq!(view.sources, "");
    }

    #[test]
    fn test_index_message_or_fallback() {
        let with_msg = Ok(IndexResponse {
            status: Some("ok".into()),
            message: Some("Indexed default PDF".into()),
        });
        let empty = Ok(IndexResponse::default());
        assert_eq!(index_status_text(IndexKind::Default, &with_msg), "Indexed default PDF");
        assert_eq!(index_status_text(IndexKind::Default, &empty), "Indexed.");
        assert_eq!(index_status_text(IndexKind::Upload, &empty), "Uploaded & indexed.");
    }

    #[test]
    fn test_stale_index_completion_is_dropped() {
        let mut view = View::new();
        let first = view.begin_index(IndexKind::Default);
        let second = view.begin_index(IndexKind::Upload);
        assert_eq!(view.index_status, "Uploading & indexing...");

        assert!(view.finish_index(second, IndexKind::Upload, &Ok(IndexResponse::default())));
        assert!(!view.finish_index(
            first,
            IndexKind::Default,
            &Err(ApiError::Status { status: 500, detail: Some("boom".into()) }),
        ));
        assert_eq!(view.index_status, "Uploaded & indexed.");
    }

    #[test]
    fn test_prompt_does_not_cancel_in_flight() {
        let mut view = View::new();
        let t = view.begin_index(IndexKind::Default);
        view.prompt_index("Please select a PDF file.");
        assert_eq!(view.index_status, "Please select a PDF file.");
        assert!(view.finish_index(t, IndexKind::Default, &Ok(IndexResponse::default())));
        assert_eq!(view.index_status, "Indexed.");
    }
}
