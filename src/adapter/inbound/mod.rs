//! Inbound adapters: event sources and operator surfaces.

pub mod cli;
pub mod console;
pub mod http;

#[cfg(feature = "telegram")]
pub mod telegram;
