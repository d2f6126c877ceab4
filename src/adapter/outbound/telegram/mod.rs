//! Telegram delivery.
//!
//! Requires the `telegram` feature to be enabled.

mod markup;

pub mod responder;

pub use responder::TelegramResponder;
