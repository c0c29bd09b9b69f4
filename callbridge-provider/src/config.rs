//! Provider connection settings.

use std::fmt;

/// Base URL of the public Vapi REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.vapi.ai";

/// Credentials and endpoint used to reach the call provider.
#[derive(Clone)]
#[non_exhaustive]
pub struct ProviderConfig {
    /// Bearer token sent with every request.
    pub api_key: String,

    /// Scheme and host of the REST API, without a trailing path.
    pub base_url: String,
}

impl ProviderConfig {
    /// Create a config for the public API with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Point the client at a different API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the call-creation endpoint.
    #[must_use]
    pub fn call_url(&self) -> String {
        format!("{}/call", self.base_url.trim_end_matches('/'))
    }
}

// The key must never reach the logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_url_strips_trailing_slash() {
        let config = ProviderConfig::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(config.call_url(), "http://localhost:8080/call");
    }

    #[test]
    fn default_base_url_is_public_api() {
        let config = ProviderConfig::new("k");
        assert_eq!(config.call_url(), "https://api.vapi.ai/call");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ProviderConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"), "api key leaked: {rendered}");
    }
}
