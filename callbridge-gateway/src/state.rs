//! Read-only state shared by every request handler.

use std::sync::Arc;

use callbridge_core::{AssistantId, PhoneNumberId};
use callbridge_provider::CallProvider;

use crate::config::GatewayConfig;

/// Provider client and server-side call settings, loaded once at startup.
///
/// Any of the fields may be absent; the call handler checks them in order
/// and refuses the request if one is missing.
#[derive(Clone, Default)]
pub struct AppState {
    /// Client used to place calls, absent if it could not be initialized.
    pub provider: Option<Arc<dyn CallProvider>>,
    /// Assistant that handles outbound calls.
    pub assistant_id: Option<AssistantId>,
    /// Originating phone number for outbound calls.
    pub phone_number_id: Option<PhoneNumberId>,
}

impl AppState {
    /// Assemble state from explicit parts.
    #[must_use]
    pub fn new(
        provider: Option<Arc<dyn CallProvider>>,
        assistant_id: Option<AssistantId>,
        phone_number_id: Option<PhoneNumberId>,
    ) -> Self {
        Self { provider, assistant_id, phone_number_id }
    }

    /// Build state from the loaded configuration, constructing the provider client.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            provider: config.build_provider(),
            assistant_id: config.assistant_id.clone(),
            phone_number_id: config.phone_number_id.clone(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.provider.as_ref().map(|_| "<provider>"))
            .field("assistant_id", &self.assistant_id)
            .field("phone_number_id", &self.phone_number_id)
            .finish()
    }
}
