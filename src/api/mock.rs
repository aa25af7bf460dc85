//! Recording transport for tests.

use super::error::ApiError;
use super::transport::{RawResponse, RequestBody, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub enum Canned {
    Reply(u16, String),
    Fail(std::io::ErrorKind, &'static str),
}

/// Replays canned replies in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Canned>>,
    calls: Mutex<Vec<(String, RequestBody)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Canned::Reply(status, body.to_string()));
        self
    }

    pub fn fail(self, kind: std::io::ErrorKind, msg: &'static str) -> Self {
        self.replies.lock().unwrap().push_back(Canned::Fail(kind, msg));
        self
    }

    pub fn calls(&self) -> Vec<(String, RequestBody)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, ApiError> {
        self.calls.lock().unwrap().push((path.to_string(), body));
        match self.replies.lock().unwrap().pop_front() {
            Some(Canned::Reply(status, body)) => Ok(RawResponse {
                status,
                body: body.into_bytes(),
            }),
            Some(Canned::Fail(kind, msg)) => Err(ApiError::Io(std::io::Error::new(kind, msg))),
            None => Err(ApiError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "no canned reply",
            ))),
        }
    }
}
