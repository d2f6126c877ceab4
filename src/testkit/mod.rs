//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`responder`] - [`RecordingResponder`](responder::RecordingResponder)
//!   that keeps every outbound message for assertions.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod responder;

pub use responder::RecordingResponder;
