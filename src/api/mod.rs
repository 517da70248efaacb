//! Typed wrappers over the salon REST API.
//!
//! One `SalonApi` method per endpoint. Each performs a single request and
//! returns either the payload, the server's message, or an `AppError`.

pub mod admin;
pub mod auth;
pub mod client;
pub mod envelope;
pub mod mock;
pub mod transport;

use crate::api::envelope::Envelope;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::views::pager::PAGE_SIZE;
use serde::de::DeserializeOwned;

pub struct SalonApi<T: Transport> {
    transport: T,
}

impl<T: Transport> SalonApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn envelope<D: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<Envelope<D>> {
        let raw = self.transport.send(&request)?;
        Envelope::decode(&raw)
    }

    /// Send a request whose success payload is in `data`.
    pub(crate) fn fetch_data<D: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<D> {
        self.envelope::<D>(request)?.expect_data()
    }

    /// Send a request whose success payload is the `message` string.
    pub(crate) fn fetch_message(&self, request: ApiRequest) -> AppResult<String> {
        self.envelope::<serde_json::Value>(request)?.expect_message()
    }

    /// Fetch one page of a paginated listing.
    pub(crate) fn fetch_page<D: DeserializeOwned>(&self, path: &str, page: u32) -> AppResult<Page<D>> {
        self.fetch_data(page_request(path, page))
    }
}

pub(crate) fn page_request(path: &str, page: u32) -> ApiRequest {
    ApiRequest::get(path)
        .query("page", page)
        .query("size", PAGE_SIZE)
}
