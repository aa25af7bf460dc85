use crate::api::error::ApiError;
use crate::api::types::{AskResponse, IndexResponse};
use crate::app::view::{IndexKind, Ticket};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// An index-default or upload request finished
    IndexFinished {
        ticket: Ticket,
        kind: IndexKind,
        result: Result<IndexResponse, ApiError>,
    },

    /// An ask request finished
    AskFinished {
        ticket: Ticket,
        question: String,
        result: Result<AskResponse, ApiError>,
    },

    /// Tick for UI refresh
    Tick,
}
