//! Delivery and slideshow configuration

use crate::submission::AckPolicy;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Google Apps Script deployment that collects Lexora inquiries.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx-4GD5HYa3PflZOaqRPPM4gRQ86qiAX9C_camdJTurk0MaDespX14CxVLlXrinKUPN/exec";

/// Configuration for delivering contact-form inquiries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Collection endpoint receiving the form-encoded POST
    pub endpoint: String,

    /// How unreadable responses are interpreted
    pub ack_policy: AckPolicy,

    /// User agent string sent with every request
    pub user_agent: String,

    /// Request timeout (seconds). `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            ack_policy: AckPolicy::default(),
            user_agent: "LexoraSite/0.1".to_string(),
            timeout_secs: None,
        }
    }
}

impl DeliveryConfig {
    /// Parse and check the endpoint. Only http(s) endpoints are accepted.
    pub fn endpoint_url(&self) -> CoreResult<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| CoreError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::InvalidEndpoint(format!(
                "unsupported scheme '{}' in {}",
                other, self.endpoint
            ))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for the showcase slideshow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideshowConfig {
    /// Auto-advance period (milliseconds)
    pub interval_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl SlideshowConfig {
    pub fn interval(&self) -> CoreResult<Duration> {
        if self.interval_ms == 0 {
            return Err(CoreError::Config(
                "slideshow interval must be greater than zero".to_string(),
            ));
        }
        Ok(Duration::from_millis(self.interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let config = DeliveryConfig::default();
        let url = config.endpoint_url().unwrap();
        assert_eq!(url.host_str(), Some("script.google.com"));
        assert_eq!(config.ack_policy, AckPolicy::OptimisticOnUnreadable);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = DeliveryConfig {
            endpoint: "ftp://example.com/form".to_string(),
            ..DeliveryConfig::default()
        };
        assert!(matches!(config.endpoint_url(), Err(CoreError::InvalidEndpoint(_))));

        let config = DeliveryConfig {
            endpoint: "not a url".to_string(),
            ..DeliveryConfig::default()
        };
        assert!(matches!(config.endpoint_url(), Err(CoreError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_slideshow_interval() {
        assert_eq!(
            SlideshowConfig::default().interval().unwrap(),
            Duration::from_millis(5000)
        );
        assert!(SlideshowConfig { interval_ms: 0 }.interval().is_err());
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: DeliveryConfig = serde_json::from_str(
            r#"{
                "endpoint": "https://forms.example.com/collect",
                "ack_policy": "require-confirmation",
                "user_agent": "test",
                "timeout_secs": 10
            }"#,
        )
        .unwrap();
        assert_eq!(config.ack_policy, AckPolicy::RequireConfirmation);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }
}
