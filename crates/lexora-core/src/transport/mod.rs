//! Transport abstraction for reaching the form endpoint
//!
//! The delivery pipeline only needs to know whether a request completed,
//! and if it did, whether its status could be read. Anything that can POST
//! a form-encoded body can implement [`Transport`].

#[cfg(feature = "runtime")]
mod http;

#[cfg(feature = "runtime")]
pub use http::HttpTransport;

use crate::form::FormData;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// How a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// Normal request whose response status is read back
    Standard,
    /// Same payload, but the response is never inspected
    FireAndForget,
}

/// What the caller could observe about a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportResponse {
    Readable { status: u16 },
    /// Completed, but the status is unavailable to the caller
    Opaque,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, TransportResponse::Readable { status } if (200..300).contains(status))
    }
}

/// Failure to complete a request at all
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Other(String),
}

/// A form-encoded POST to the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    endpoint: Url,
    pairs: Vec<(String, String)>,
}

impl FormRequest {
    pub fn new(endpoint: Url, data: &FormData) -> Self {
        let pairs = data
            .pairs()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        Self { endpoint, pairs }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &FormRequest,
        mode: RequestMode,
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        request: &FormRequest,
        mode: RequestMode,
    ) -> Result<TransportResponse, TransportError> {
        (**self).send(request, mode).await
    }
}
