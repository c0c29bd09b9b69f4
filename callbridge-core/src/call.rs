use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::{AssistantId, PhoneNumber, PhoneNumberId};

/// Everything needed to ask the provider to place one outbound call.
///
/// Built per request and discarded once the provider has answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CallRequest {
    /// Number the provider should dial.
    pub customer_number: PhoneNumber,
    /// Assistant that handles the conversation.
    pub assistant_id: AssistantId,
    /// Originating number the call is placed from.
    pub phone_number_id: PhoneNumberId,
}

impl CallRequest {
    /// Create a new call request.
    #[must_use]
    pub fn new(
        customer_number: PhoneNumber,
        assistant_id: AssistantId,
        phone_number_id: PhoneNumberId,
    ) -> Self {
        Self {
            customer_number,
            assistant_id,
            phone_number_id,
        }
    }
}

/// What the provider reported back after accepting a call request.
///
/// Every field is optional: the provider payload is only partially documented,
/// so callers must cope with any of them being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CallInfo {
    /// Provider-assigned call identifier.
    pub id: Option<String>,
    /// Provider status string, e.g. `"queued"`.
    pub status: Option<String>,
    /// The provider response as received.
    pub raw: Option<Value>,
}

impl CallInfo {
    /// Create a call result from its parts.
    #[must_use]
    pub fn new(id: Option<String>, status: Option<String>, raw: Option<Value>) -> Self {
        Self { id, status, raw }
    }

    /// Extract a call result from a provider JSON payload.
    ///
    /// `id` and `status` are taken only when they are strings. The raw payload
    /// is kept only when it is a JSON object.
    #[must_use]
    pub fn from_payload(payload: Value) -> Self {
        let field = |name: &str| payload.get(name).and_then(Value::as_str).map(str::to_owned);
        let id = field("id");
        let status = field("status");
        let raw = payload.is_object().then_some(payload);
        Self { id, status, raw }
    }
}
