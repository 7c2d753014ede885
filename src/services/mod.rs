//! Host services used by the HTTP and websocket routes.
//!
//! Route handlers stay focused on request translation; the capture loop and
//! its fan-out live here.

pub mod stream;
