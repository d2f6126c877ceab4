//! Recording responder.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{ConversationId, OutboundMessage};
use crate::port::outbound::responder::Responder;

/// Thread-safe message collector for reply assertions in tests.
///
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingResponder {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingResponder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    /// Every message sent so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().clone()
    }

    /// Messages sent to one conversation, in order.
    #[must_use]
    pub fn messages_for(&self, conversation: ConversationId) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .iter()
            .filter(|m| m.conversation == conversation)
            .cloned()
            .collect()
    }

    /// Bodies of every message sent so far.
    #[must_use]
    pub fn bodies(&self) -> Vec<String> {
        self.sent.lock().iter().map(|m| m.body.clone()).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<OutboundMessage> {
        self.sent.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl Responder for RecordingResponder {
    fn send(&self, message: OutboundMessage) {
        self.sent.lock().push(message);
    }
}
