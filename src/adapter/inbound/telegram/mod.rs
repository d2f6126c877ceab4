//! Telegram update intake.
//!
//! Converts bot updates into [`InboundEvent`](crate::domain::InboundEvent)s
//! and hands them to the application's
//! [`EventHandler`](crate::port::inbound::dispatch::EventHandler), over
//! either long polling or a webhook.
//!
//! Requires the `telegram` feature to be enabled.

mod handler;

pub mod listener;

pub use handler::{register_bot_commands, schema};
pub use listener::{run_polling, run_webhook};
