//! Request dispatcher.
//!
//! Turns the three user operations into backend requests. Each call does the
//! local validation first (writing the prompt and sending nothing if it
//! fails), then marks the region busy and spawns a task that performs the
//! request and posts the outcome back to the event loop as an [`AppEvent`].

use crate::api::client::QaClient;
use crate::api::error::{ApiError, ValidationError};
use crate::api::types::{parse_upload_path, Question, UploadFile};
use crate::app::event::AppEvent;
use crate::app::view::{IndexKind, Ticket, View};
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct Dispatcher {
    client: QaClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(client: QaClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn index_default(&self, view: &mut View) -> Ticket {
        let ticket = view.begin_index(IndexKind::Default);
        info!(ticket, "dispatching index-default");

        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.index_default().await;
            let _ = tx.send(AppEvent::IndexFinished {
                ticket,
                kind: IndexKind::Default,
                result,
            });
        });
        ticket
    }

    pub fn upload_and_index(&self, view: &mut View, raw_path: &str) -> Result<Ticket, ValidationError> {
        let path = match parse_upload_path(raw_path) {
            Ok(path) => path,
            Err(e) => {
                debug!("upload rejected: no file selected");
                view.prompt_index(e.to_string());
                return Err(e);
            }
        };
        let ticket = view.begin_index(IndexKind::Upload);
        info!(ticket, path = %path.display(), "dispatching upload-and-index");

        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = match UploadFile::read(&path).await {
                Ok(file) => client.upload_and_index(file).await,
                Err(e) => Err(ApiError::Io(e)),
            };
            let _ = tx.send(AppEvent::IndexFinished {
                ticket,
                kind: IndexKind::Upload,
                result,
            });
        });
        Ok(ticket)
    }

    pub fn ask(&self, view: &mut View, raw_question: &str) -> Result<Ticket, ValidationError> {
        let question = match Question::parse(raw_question) {
            Ok(q) => q,
            Err(e) => {
                debug!("ask rejected: empty question");
                view.prompt_ask(e.to_string());
                return Err(e);
            }
        };
        let ticket = view.begin_ask();
        info!(ticket, "dispatching ask");

        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.ask(question.as_str()).await;
            let _ = tx.send(AppEvent::AskFinished {
                ticket,
                question: question.as_str().to_string(),
                result,
            });
        });
        Ok(ticket)
    }
}
