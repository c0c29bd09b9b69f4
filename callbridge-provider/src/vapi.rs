//! Vapi call provider.
//!
//! Places outbound phone calls through the Vapi REST API (`POST /call`).
//!
//! # API Reference
//! <https://docs.vapi.ai/api-reference/calls/create>

use async_trait::async_trait;
use callbridge_core::{CallInfo, CallRequest};
use serde::Serialize;
use serde_json::Value;

use crate::provider::CallProvider;
use crate::{ProviderConfig, ProviderError};

/// Vapi REST client.
///
/// Holds a pooled HTTP client; cloning is cheap and shares the pool.
/// Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct VapiClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

/// Wire body of `POST /call`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCallBody<'a> {
    assistant_id: &'a str,
    phone_number_id: &'a str,
    customer: Customer<'a>,
}

#[derive(Debug, Serialize)]
struct Customer<'a> {
    number: &'a str,
}

impl<'a> From<&'a CallRequest> for CreateCallBody<'a> {
    fn from(request: &'a CallRequest) -> Self {
        Self {
            assistant_id: request.assistant_id.as_str(),
            phone_number_id: request.phone_number_id.as_str(),
            customer: Customer { number: request.customer_number.as_str() },
        }
    }
}

impl VapiClient {
    /// Create a client for the given provider config.
    ///
    /// # Errors
    /// Returns [`ProviderError::Init`] if the API key is empty or the TLS
    /// backend cannot be initialized.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::Init("API key is empty".to_owned()));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("callbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Init(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The config this client was built with.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl CallProvider for VapiClient {
    async fn create_call(&self, request: &CallRequest) -> Result<CallInfo, ProviderError> {
        let url = self.config.call_url();
        tracing::info!(
            %url,
            assistant_id = %request.assistant_id,
            phone_number_id = %request.phone_number_id,
            "creating Vapi call"
        );

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&CreateCallBody::from(request))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("POST {url}: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("read response body: {e}")))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %text, "Vapi rejected call");
            return Err(ProviderError::rejected(status.as_u16(), &text));
        }

        let payload: Value = serde_json::from_str(&text).map_err(|e| ProviderError::Decode {
            reason: e.to_string(),
            text: text.clone(),
        })?;
        let info = CallInfo::from_payload(payload);

        tracing::info!(
            call_id = info.id.as_deref().unwrap_or("-"),
            status = info.status.as_deref().unwrap_or("-"),
            "Vapi call created"
        );
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use callbridge_core::{AssistantId, PhoneNumber, PhoneNumberId};
    use serde_json::json;

    use super::*;

    #[test]
    fn create_call_body_uses_camel_case_and_nested_customer() {
        let request = match (
            PhoneNumber::new("+15551234567"),
            AssistantId::new("asst-1"),
            PhoneNumberId::new("pn-1"),
        ) {
            (Ok(n), Ok(a), Ok(p)) => CallRequest::new(n, a, p),
            other => panic!("invalid fixture: {other:?}"),
        };
        let value = match serde_json::to_value(CreateCallBody::from(&request)) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(
            value,
            json!({
                "assistantId": "asst-1",
                "phoneNumberId": "pn-1",
                "customer": {"number": "+15551234567"}
            })
        );
    }

    #[test]
    fn new_rejects_empty_api_key() {
        let result = VapiClient::new(ProviderConfig::new(""));
        assert!(
            matches!(result, Err(ProviderError::Init(_))),
            "empty key must fail initialization"
        );
    }
}
