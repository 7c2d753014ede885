//! Networking: REST control calls and the websocket event stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` drives the host's control endpoints, `monitor_client` keeps the
//! event socket open, and `types` re-exports the shared wire schema.

pub mod api;
pub mod monitor_client;
pub mod types;
