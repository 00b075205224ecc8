//! Server-side state shared with handlers and server functions

use crate::config::AppConfig;
use axum::extract::FromRef;
use leptos::LeptosOptions;
use lexora_core::{deliver, AckPolicy, CoreResult, DeliveryOutcome, FormData, FormRequest, HttpTransport};
use std::sync::Arc;
use url::Url;

/// Everything `SubmitInquiry` needs to relay an inquiry
#[derive(Clone, Debug)]
pub struct SiteState {
    pub transport: Arc<HttpTransport>,
    pub endpoint: Url,
    pub policy: AckPolicy,
}

impl SiteState {
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(&config.delivery)?),
            endpoint: config.delivery.endpoint_url()?,
            policy: config.delivery.ack_policy,
        })
    }

    pub async fn relay(&self, inquiry: &FormData) -> DeliveryOutcome {
        let request = FormRequest::new(self.endpoint.clone(), inquiry);
        deliver(self.transport.as_ref(), &request, self.policy).await
    }
}

#[derive(Clone, FromRef)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub site: SiteState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Router};
    use lexora_core::{Acknowledgment, SubmissionFailed};
    use tokio::net::TcpListener;

    fn config_for(endpoint: String, policy: &str) -> AppConfig {
        AppConfig::from_lookup(move |key| match key {
            "LEXORA_FORM_ENDPOINT" => Some(endpoint.clone()),
            "LEXORA_ACK_POLICY" => Some(policy.to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn inquiry() -> FormData {
        FormData {
            name: "Jan".to_string(),
            email: "jan@lexora.si".to_string(),
            phone: String::new(),
            message: "Demo, prosim.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_relay_confirms_accepted_inquiry() {
        let app = Router::new().route("/exec", post(|| async { StatusCode::OK }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let site = SiteState::from_config(&config_for(format!("http://{}/exec", addr), "optimistic")).unwrap();
        let outcome = site.relay(&inquiry()).await;
        assert_eq!(outcome, Ok(Acknowledgment::Confirmed { status: 200 }));
    }

    #[tokio::test]
    async fn test_relay_to_closed_port_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let site = SiteState::from_config(&config_for(format!("http://{}/exec", addr), "optimistic")).unwrap();
        let outcome = site.relay(&inquiry()).await;
        assert!(matches!(outcome, Err(SubmissionFailed::Unreachable { .. })));
    }
}
