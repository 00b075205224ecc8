//! Site configuration

use lexora_core::{CoreError, CoreResult, DeliveryConfig};

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub delivery: DeliveryConfig,
}

impl AppConfig {
    /// Defaults overridden by `LEXORA_*` environment variables
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut delivery = DeliveryConfig::default();

        if let Some(endpoint) = lookup("LEXORA_FORM_ENDPOINT") {
            delivery.endpoint = endpoint;
        }
        if let Some(policy) = lookup("LEXORA_ACK_POLICY") {
            delivery.ack_policy = policy.parse().map_err(CoreError::Config)?;
        }
        if let Some(user_agent) = lookup("LEXORA_USER_AGENT") {
            delivery.user_agent = user_agent;
        }
        if let Some(timeout) = lookup("LEXORA_REQUEST_TIMEOUT_SECS") {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                CoreError::Config(format!("LEXORA_REQUEST_TIMEOUT_SECS '{}': {}", timeout, e))
            })?;
            delivery.timeout_secs = Some(secs);
        }

        delivery.endpoint_url()?;
        Ok(Self { delivery })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexora_core::AckPolicy;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.delivery, DeliveryConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LEXORA_FORM_ENDPOINT", "https://forms.example.com/collect"),
            ("LEXORA_ACK_POLICY", "require-confirmation"),
            ("LEXORA_USER_AGENT", "lexora-test"),
            ("LEXORA_REQUEST_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.delivery.endpoint, "https://forms.example.com/collect");
        assert_eq!(config.delivery.ack_policy, AckPolicy::RequireConfirmation);
        assert_eq!(config.delivery.user_agent, "lexora-test");
        assert_eq!(config.delivery.timeout_secs, Some(15));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(AppConfig::from_lookup(lookup(&[("LEXORA_ACK_POLICY", "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("LEXORA_REQUEST_TIMEOUT_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("LEXORA_FORM_ENDPOINT", "nowhere")])).is_err());
    }
}
