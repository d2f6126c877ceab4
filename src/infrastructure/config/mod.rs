//! Infrastructure configuration modules.

pub mod logging;
pub mod service;
pub mod settings;
pub mod telegram;

pub use settings::{Config, WEBHOOK_PATH};
pub use telegram::Transport;
