//! Responder port for outbound chat messages.
//!
//! This module defines the trait the core uses to reply to a conversation.
//! Delivery is fire-and-forget: the core never learns whether a message
//! reached the user.

use crate::domain::{Formatting, Keyboard, OutboundMessage};

/// Trait for outbound message delivery.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `send` must not block; queue the message and deliver it elsewhere
/// - Failures are the implementation's to log; they are never retried
pub trait Responder: Send + Sync {
    /// Enqueue a message for delivery.
    fn send(&self, message: OutboundMessage);
}

/// A no-op responder for when replies are disabled.
pub struct NullResponder;

impl Responder for NullResponder {
    fn send(&self, _message: OutboundMessage) {}
}

/// A responder that writes outbound messages to the log via tracing.
///
/// Used in dry-run mode where no bot token is configured.
pub struct LogResponder;

impl Responder for LogResponder {
    fn send(&self, message: OutboundMessage) {
        use tracing::info;

        let keyboard = match &message.keyboard {
            None => "none",
            Some(Keyboard::Reply { .. }) => "reply",
            Some(Keyboard::Inline { .. }) => "inline",
        };
        info!(
            conversation = %message.conversation,
            rich = message.formatting == Formatting::RichText,
            keyboard,
            body = %message.body,
            "Outbound message"
        );
    }
}
