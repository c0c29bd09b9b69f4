//! Environment-driven gateway configuration.
//!
//! Read once at startup. Missing provider settings are logged but do not stop
//! the process; they are enforced per request by the call handler.

use std::sync::Arc;

use callbridge_core::{AssistantId, PhoneNumberId};
use callbridge_provider::{CallProvider, ProviderConfig, VapiClient, DEFAULT_BASE_URL};

/// Default socket address the HTTP server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

pub const ENV_API_KEY: &str = "VAPI_API_KEY";
pub const ENV_ASSISTANT_ID: &str = "VAPI_ASSISTANT_ID";
pub const ENV_PHONE_NUMBER_ID: &str = "VAPI_PHONE_NUMBER_ID";
pub const ENV_BASE_URL: &str = "VAPI_BASE_URL";
pub const ENV_LISTEN_ADDR: &str = "CALLBRIDGE_LISTEN_ADDR";

/// Settings loaded from the process environment.
///
/// Empty values are treated as absent.
#[derive(Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Provider bearer token.
    pub api_key: Option<String>,
    /// Assistant that handles outbound calls.
    pub assistant_id: Option<AssistantId>,
    /// Originating phone number for outbound calls.
    pub phone_number_id: Option<PhoneNumberId>,
    /// Provider API base URL.
    pub base_url: String,
    /// Address the HTTP server listens on.
    pub listen_addr: String,
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            api_key: get(ENV_API_KEY),
            assistant_id: get(ENV_ASSISTANT_ID).and_then(|v| AssistantId::new(v).ok()),
            phone_number_id: get(ENV_PHONE_NUMBER_ID).and_then(|v| PhoneNumberId::new(v).ok()),
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            listen_addr: get(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
        }
    }

    /// Log a warning for every missing provider setting.
    pub fn log_missing(&self) {
        if self.api_key.is_none() {
            tracing::warn!(var = ENV_API_KEY, "API key not set; calls will be refused");
        }
        if self.assistant_id.is_none() {
            tracing::warn!(var = ENV_ASSISTANT_ID, "assistant id not set; calls will be refused");
        }
        if self.phone_number_id.is_none() {
            tracing::warn!(
                var = ENV_PHONE_NUMBER_ID,
                "phone number id not set; calls will be refused"
            );
        }
    }

    /// Construct the provider client, if an API key is configured.
    ///
    /// Construction failures are logged and yield `None`.
    #[must_use]
    pub fn build_provider(&self) -> Option<Arc<dyn CallProvider>> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("Vapi client not initialized because API key is missing");
            return None;
        };
        let config = ProviderConfig::new(api_key.clone()).with_base_url(self.base_url.clone());
        match VapiClient::new(config) {
            Ok(client) => {
                tracing::info!(base_url = %self.base_url, "Vapi client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize Vapi client");
                None
            }
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("assistant_id", &self.assistant_id)
            .field("phone_number_id", &self.phone_number_id)
            .field("base_url", &self.base_url)
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn from_lookup_reads_all_values() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key"),
            (ENV_ASSISTANT_ID, "asst"),
            (ENV_PHONE_NUMBER_ID, "pn"),
            (ENV_BASE_URL, "http://localhost:9999"),
            (ENV_LISTEN_ADDR, "0.0.0.0:8080"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.assistant_id.as_ref().map(AssistantId::as_str), Some("asst"));
        assert_eq!(config.phone_number_id.as_ref().map(PhoneNumberId::as_str), Some("pn"));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn from_lookup_defaults_when_unset() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert!(config.api_key.is_none());
        assert!(config.assistant_id.is_none());
        assert!(config.phone_number_id.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn empty_values_are_treated_as_missing() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, ""),
            (ENV_ASSISTANT_ID, ""),
            (ENV_PHONE_NUMBER_ID, ""),
        ]));
        assert!(config.api_key.is_none(), "empty API key must be absent");
        assert!(config.assistant_id.is_none(), "empty assistant id must be absent");
        assert!(config.phone_number_id.is_none(), "empty phone number id must be absent");
    }

    #[test]
    fn build_provider_without_key_returns_none() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert!(config.build_provider().is_none());
    }

    #[test]
    fn build_provider_with_key_returns_client() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "key")]));
        assert!(config.build_provider().is_some());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "super-secret")]));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"), "api key leaked: {rendered}");
    }
}
