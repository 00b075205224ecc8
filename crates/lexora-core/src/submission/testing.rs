//! In-memory transport for delivery tests

use crate::form::FormData;
use crate::transport::{FormRequest, RequestMode, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;
use url::Url;

pub(crate) fn endpoint() -> Url {
    Url::parse("https://forms.example.com/macros/s/test/exec").unwrap()
}

pub(crate) fn inquiry() -> FormData {
    FormData {
        name: "Ana Novak".to_string(),
        email: "ana@example.si".to_string(),
        phone: "068 686 880".to_string(),
        message: "Zanima me predstavitev.".to_string(),
    }
}

/// Answers each call with the next scripted result and records what it saw.
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    calls: Mutex<Vec<(RequestMode, String)>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub(crate) fn new(
        script: impl IntoIterator<Item = Result<TransportResponse, TransportError>>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::<Result<TransportResponse, TransportError>>::new())
    }

    /// Hold every call until the gate is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn modes(&self) -> Vec<RequestMode> {
        self.calls.lock().iter().map(|(mode, _)| *mode).collect()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, body)| body.clone()).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        request: &FormRequest,
        mode: RequestMode,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().push((mode, request.encode()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
    }
}
