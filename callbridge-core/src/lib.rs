//! Core types for the callbridge voice-call gateway.
//!
//! Defines the transient domain types that flow through a single
//! call-initiation request: the caller-supplied destination number, the
//! server-configured provider identifiers, and the call result.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod call;
pub mod error;
pub mod id;

pub use call::{CallInfo, CallRequest};
pub use error::CoreError;
pub use id::{AssistantId, PhoneNumber, PhoneNumberId};
