//! HTTP gateway that turns a web request into an outbound voice call.
//!
//! Exposes a liveness route and a single call-initiation endpoint that relays
//! to the configured call provider (Vapi).

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
