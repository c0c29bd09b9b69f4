//! Outbound call placement for the callbridge gateway.
//!
//! Defines the [`CallProvider`] seam the gateway depends on and a
//! [`VapiClient`] that implements it against the Vapi REST API.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod provider;
pub mod vapi;

pub use config::{ProviderConfig, DEFAULT_BASE_URL};
pub use error::ProviderError;
pub use provider::CallProvider;
pub use vapi::VapiClient;
