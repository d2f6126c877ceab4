//! Outbound message model handed to the responder.

use super::id::ConversationId;

/// How the message body should be rendered by the channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatting {
    #[default]
    Plain,
    /// Telegram MarkdownV2. Bodies must already be escaped.
    RichText,
}

/// A button on an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

/// Keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Persistent reply keyboard; each inner vec is a row of labels.
    Reply { rows: Vec<Vec<String>> },
    /// Inline keyboard; pressing a button yields a callback with its data.
    Inline { rows: Vec<Vec<InlineButton>> },
}

/// A message addressed to one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub conversation: ConversationId,
    pub body: String,
    pub formatting: Formatting,
    pub keyboard: Option<Keyboard>,
}

impl OutboundMessage {
    /// Plain-text message without a keyboard.
    #[must_use]
    pub fn plain(conversation: ConversationId, body: impl Into<String>) -> Self {
        Self {
            conversation,
            body: body.into(),
            formatting: Formatting::Plain,
            keyboard: None,
        }
    }

    /// Rich-text message without a keyboard.
    #[must_use]
    pub fn rich(conversation: ConversationId, body: impl Into<String>) -> Self {
        Self {
            formatting: Formatting::RichText,
            ..Self::plain(conversation, body)
        }
    }

    /// Attach a keyboard.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_formatting() {
        let chat = ConversationId::new(1);
        assert_eq!(OutboundMessage::plain(chat, "a").formatting, Formatting::Plain);
        assert_eq!(
            OutboundMessage::rich(chat, "a").formatting,
            Formatting::RichText
        );
        assert!(OutboundMessage::rich(chat, "a").keyboard.is_none());
    }
}
