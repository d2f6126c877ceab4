//! Outbound adapters: message delivery.

#[cfg(feature = "telegram")]
pub mod telegram;
