//! In-memory transport serving canned responses and recording every
//! request it receives.

use crate::api::transport::{ApiRequest, RawResponse, Transport};
use crate::errors::{AppError, AppResult};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<AppResult<RawResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    /// Queue a 200 envelope carrying `data`.
    pub fn ok_data(&self, data: Value) -> &Self {
        self.respond(
            200,
            json!({ "status": 200, "message": "OK", "data": data }).to_string(),
        )
    }

    /// Queue a 200 envelope carrying only `message`.
    pub fn ok_message(&self, message: &str) -> &Self {
        self.respond(200, json!({ "status": 200, "message": message }).to_string())
    }

    /// Queue an error envelope.
    pub fn fail(&self, status: u16, message: &str) -> &Self {
        self.respond(
            status,
            json!({ "status": status, "message": message }).to_string(),
        )
    }

    /// Queue a transport-level failure (connection refused and the like).
    pub fn network_error(&self) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(AppError::Network("connection refused".into())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> AppResult<RawResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no canned response".into())))
    }
}
