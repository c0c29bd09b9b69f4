//! Call-provider abstraction trait.
//!
//! Lets the gateway place calls without knowing which service (or test
//! double) is on the other end.

use async_trait::async_trait;
use callbridge_core::{CallInfo, CallRequest};

use crate::ProviderError;

/// A service that can place outbound voice calls.
///
/// Implementations must be `Send + Sync` to allow sharing across request
/// handlers.
///
/// # Idempotence
/// None. Every successful invocation asks the provider for a new call.
#[async_trait]
pub trait CallProvider: Send + Sync {
    /// Ask the provider to place a single outbound call.
    ///
    /// # Errors
    /// Returns [`ProviderError::Transport`] if the provider could not be reached,
    /// [`ProviderError::Rejected`] if it refused the request, or
    /// [`ProviderError::Decode`] if its answer was unreadable.
    async fn create_call(&self, request: &CallRequest) -> Result<CallInfo, ProviderError>;
}
