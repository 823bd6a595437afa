//! Scripted transport for unit tests.

use crate::error::{CheckError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays queued responses in order and records every request.
///
/// Once the script runs out every further call fails with a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn unreachable(self) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(CheckError::Transport("connection refused".to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CheckError::Transport("script exhausted".to_string())))
    }
}
