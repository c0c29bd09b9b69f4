//! Axum route handlers for the callbridge gateway.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use callbridge_core::{CallInfo, CallRequest, PhoneNumber};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::GatewayError, state::AppState};

// ── Shared state ─────────────────────────────────────────────────────────────

type SharedState = Arc<AppState>;

// ── Response types ────────────────────────────────────────────────────────────

pub const CALL_INITIATED_MESSAGE: &str = "Call initiated successfully with Vapi";

/// Body of a successful `POST /make-call`.
#[derive(Debug, Serialize)]
pub struct MakeCallResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapi_response: Option<Value>,
}

impl From<CallInfo> for MakeCallResponse {
    fn from(info: CallInfo) -> Self {
        Self {
            message: CALL_INITIATED_MESSAGE,
            call_id: info.id,
            status: info.status,
            vapi_response: info.raw,
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(hello_world))
        .route("/make-call", post(make_call))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — liveness probe.
pub async fn hello_world() -> &'static str {
    "Hello, World!"
}

/// `POST /make-call` — ask the provider to call the given number.
///
/// Configuration is checked before the body is inspected, so a misconfigured
/// server answers 500 whatever the client sent.
///
/// The provider call runs on its own task: if the client disconnects, the
/// call still completes server-side.
///
/// # Errors
/// Returns a configuration variant of [`GatewayError`] if the server is not
/// fully configured, [`GatewayError::InvalidJson`] or
/// [`GatewayError::MissingPhoneNumber`] for bad input, and
/// [`GatewayError::Provider`] if the provider call fails.
pub async fn make_call(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<MakeCallResponse>, GatewayError> {
    let provider = state.provider.clone().ok_or(GatewayError::ClientNotInitialized)?;
    let assistant_id = state.assistant_id.clone().ok_or(GatewayError::AssistantNotConfigured)?;
    let phone_number_id =
        state.phone_number_id.clone().ok_or(GatewayError::PhoneNumberIdNotConfigured)?;

    let customer_number = parse_phone_number(&body)?;
    tracing::info!(number = %customer_number, "initiating call");

    let request = CallRequest::new(customer_number, assistant_id, phone_number_id);
    let info = tokio::spawn(async move { provider.create_call(&request).await })
        .await
        .map_err(|e| GatewayError::CallTask(e.to_string()))??;

    Ok(Json(MakeCallResponse::from(info)))
}

/// Extract the destination number from a `POST /make-call` body.
///
/// # Errors
/// Returns [`GatewayError::InvalidJson`] if the body is not JSON, or
/// [`GatewayError::MissingPhoneNumber`] if `phoneNumber` is absent, not a
/// string, or empty.
pub fn parse_phone_number(body: &[u8]) -> Result<PhoneNumber, GatewayError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| GatewayError::InvalidJson)?;
    let number = payload
        .get("phoneNumber")
        .and_then(Value::as_str)
        .ok_or(GatewayError::MissingPhoneNumber)?;
    PhoneNumber::new(number).map_err(|_| GatewayError::MissingPhoneNumber)
}
