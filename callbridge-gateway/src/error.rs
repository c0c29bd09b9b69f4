//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use callbridge_provider::ProviderError;
use serde_json::json;

/// Errors that can occur while handling a call-initiation request.
///
/// The `Display` text of each variant is the `error` message sent to clients.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// No provider client: the API key is missing or the client failed to build.
    #[error("Vapi client not initialized")]
    ClientNotInitialized,

    #[error("Vapi assistant ID not configured on server")]
    AssistantNotConfigured,

    #[error("Vapi phone number ID not configured on server")]
    PhoneNumberIdNotConfigured,

    /// The request body is not valid JSON.
    #[error("Invalid JSON payload")]
    InvalidJson,

    /// The request body has no usable `phoneNumber` string.
    #[error("Missing 'phoneNumber' in request")]
    MissingPhoneNumber,

    /// The provider refused or failed the call.
    #[error("Failed to initiate call with Vapi")]
    Provider(#[source] ProviderError),

    /// The task driving the provider call panicked or was aborted.
    #[error("Failed to initiate call with Vapi")]
    CallTask(String),
}

impl GatewayError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidJson | GatewayError::MissingPhoneNumber => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::ClientNotInitialized
            | GatewayError::AssistantNotConfigured
            | GatewayError::PhoneNumberIdNotConfigured
            | GatewayError::Provider(_)
            | GatewayError::CallTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for GatewayError {
    fn from(e: ProviderError) -> Self {
        GatewayError::Provider(e)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            GatewayError::Provider(e) => {
                let details = e.details();
                tracing::error!(error = %e, %details, "Vapi call failed");
                json!({"error": self.to_string(), "details": details})
            }
            GatewayError::CallTask(reason) => {
                tracing::error!(%reason, "Vapi call task failed");
                json!({"error": self.to_string(), "details": reason})
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %self, "refusing call: server misconfigured");
                json!({"error": self.to_string()})
            }
            _ => {
                tracing::warn!(error = %self, "rejecting call request");
                json!({"error": self.to_string()})
            }
        };
        (status, Json(body)).into_response()
    }
}
