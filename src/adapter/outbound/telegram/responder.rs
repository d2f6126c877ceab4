//! Telegram responder.
//!
//! Provides the [`TelegramResponder`], which queues outbound messages and
//! delivers them from a background worker. Delivery failures are logged
//! and dropped.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::markup::reply_markup;
use crate::domain::{Formatting, OutboundMessage};
use crate::port::outbound::responder::Responder;

/// Responder that sends messages through the Telegram Bot API.
pub struct TelegramResponder {
    /// Channel sender for queuing outbound messages.
    sender: mpsc::UnboundedSender<OutboundMessage>,
}

impl TelegramResponder {
    /// Create a responder and spawn its background worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(telegram_worker(bot, receiver));
        Self { sender }
    }
}

impl Responder for TelegramResponder {
    fn send(&self, message: OutboundMessage) {
        if self.sender.send(message).is_err() {
            warn!("Telegram responder channel closed");
        }
    }
}

/// Background worker that sends Telegram messages in queue order.
async fn telegram_worker(bot: Bot, mut receiver: mpsc::UnboundedReceiver<OutboundMessage>) {
    info!("Telegram responder started");

    while let Some(message) = receiver.recv().await {
        let conversation = message.conversation;
        let mut request = bot.send_message(ChatId(conversation.get()), message.body);
        if message.formatting == Formatting::RichText {
            request = request.parse_mode(ParseMode::MarkdownV2);
        }
        if let Some(keyboard) = &message.keyboard {
            request = request.reply_markup(reply_markup(keyboard));
        }

        match request.await {
            Ok(_) => debug!(%conversation, "Telegram message sent"),
            Err(e) => error!(%conversation, error = %e, "Failed to send Telegram message"),
        }
    }

    warn!("Telegram responder worker shutting down");
}
