//! reqwest-backed transport

use super::{FormRequest, RequestMode, Transport, TransportError, TransportResponse, FORM_CONTENT_TYPE};
use crate::config::DeliveryConfig;
use crate::CoreResult;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Posts inquiries over HTTP with a shared connection pool
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &DeliveryConfig) -> CoreResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &FormRequest,
        mode: RequestMode,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(request.endpoint().clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.encode())
            .send()
            .await?;

        match mode {
            RequestMode::Standard => Ok(TransportResponse::Readable {
                status: response.status().as_u16(),
            }),
            RequestMode::FireAndForget => {
                drop(response);
                Ok(TransportResponse::Opaque)
            }
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}
