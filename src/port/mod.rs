//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────────┐      ┌────────────┐
//!   │ Event source │ ───▶ │ Application (core)  │ ───▶ │ Responder  │
//!   │   adapter    │      │  dispatch + state   │      │  adapter   │
//!   └──────────────┘      └─────────────────────┘      └────────────┘
//!                                   │
//!                                   ▼
//!                           StatusView (health)
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::dispatch::{DispatchOutcome, EventHandler, IgnoreReason};
pub use inbound::status::{StatusSnapshot, StatusView};
pub use outbound::responder::{LogResponder, NullResponder, Responder};
