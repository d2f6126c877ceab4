//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`dispatch`]: Event handling entry point for chat channels
//! - [`status`]: Read-only status for health probes

pub mod dispatch;
pub mod status;
