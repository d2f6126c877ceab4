//! Chatdesk - a chat-driven demo trading desk bot.
//!
//! Users press keyboard buttons in a chat to see a fake deposit address,
//! receive a simulated trade alert followed by a delayed completion,
//! toggle a trading flag, and walk through a withdrawal dialogue. All data
//! is synthetic; no funds, exchanges, or blockchains are involved.
//!
//! # Architecture
//!
//! - [`domain`] - Channel-agnostic types: events, actions, outbound messages
//! - [`port`] - Traits between the core and its adapters
//! - [`application`] - Routing, conversation state, delayed completions,
//!   reply templates
//! - [`adapter`] - Telegram, console, HTTP health, and CLI adapters
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram Bot API transport via `teloxide`
//! - `testkit` - Test helpers for integration tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chatdesk::domain::{ConversationId, InboundEvent};
//! use chatdesk::infrastructure::bootstrap::build_desk;
//! use chatdesk::infrastructure::config::Config;
//! use chatdesk::port::LogResponder;
//!
//! let desk = build_desk(&Config::default(), Arc::new(LogResponder));
//! desk.router.dispatch(InboundEvent::from_text(ConversationId::new(1), "/start"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
