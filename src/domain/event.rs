//! Inbound events delivered by the event source.

use super::action::Action;
use super::id::ConversationId;

/// An event arriving from the chat channel.
///
/// Events from one conversation arrive in order; nothing is guaranteed
/// across conversations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Text that matches one of the routed actions.
    Command {
        conversation: ConversationId,
        text: String,
    },
    /// A button press carrying opaque callback data.
    Callback {
        conversation: ConversationId,
        data: String,
    },
    /// Any other text, e.g. a reply to a prompt.
    FreeText {
        conversation: ConversationId,
        text: String,
    },
}

impl InboundEvent {
    /// Classify a text message as `Command` or `FreeText`.
    ///
    /// Classification only affects logging; the dispatcher routes both
    /// variants the same way.
    #[must_use]
    pub fn from_text(conversation: ConversationId, text: impl Into<String>) -> Self {
        let text = text.into();
        if Action::match_text(&text).is_some() {
            Self::Command { conversation, text }
        } else {
            Self::FreeText { conversation, text }
        }
    }

    /// Build a callback event.
    #[must_use]
    pub fn callback(conversation: ConversationId, data: impl Into<String>) -> Self {
        Self::Callback {
            conversation,
            data: data.into(),
        }
    }

    /// Conversation the event originates from.
    #[must_use]
    pub const fn conversation(&self) -> ConversationId {
        match self {
            Self::Command { conversation, .. }
            | Self::Callback { conversation, .. }
            | Self::FreeText { conversation, .. } => *conversation,
        }
    }

    /// Stable name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Callback { .. } => "callback",
            Self::FreeText { .. } => "free_text",
        }
    }
}
