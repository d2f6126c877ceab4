//! Withdrawal sub-dialogue.
//!
//! Two steps layered on top of single-shot dispatch: the inline button
//! arms an address expectation for its conversation, and the next text
//! from that same conversation consumes it.

use std::sync::Arc;

use tracing::{info, warn};

use super::store::ConversationStore;
use super::template;
use crate::domain::{parse_address_reply, transaction_hash, AddressReply, ConversationId};
use crate::port::outbound::responder::Responder;

/// Result of offering a text message to the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// No prompt was open; the text is not for us.
    NotAwaiting,
    /// Prompt answered with an address; confirmation sent.
    Accepted(String),
    /// Prompt consumed by text that is not an address; nothing sent.
    Rejected,
}

/// Result of a withdrawal button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Prompt sent and expectation armed.
    Prompted,
    /// A prompt was already open; refusal sent.
    AlreadyPending,
}

pub struct WithdrawalDialogue {
    store: Arc<ConversationStore>,
    responder: Arc<dyn Responder>,
}

impl WithdrawalDialogue {
    #[must_use]
    pub fn new(store: Arc<ConversationStore>, responder: Arc<dyn Responder>) -> Self {
        Self { store, responder }
    }

    /// Handle the "Enter ETH Address" button.
    pub fn request_address(&self, conversation: ConversationId) -> RequestOutcome {
        match self.store.arm_withdrawal(conversation) {
            Ok(()) => {
                self.responder.send(template::address_prompt(conversation));
                info!(%conversation, "Awaiting withdrawal address");
                RequestOutcome::Prompted
            }
            Err(pending) => {
                self.responder
                    .send(template::withdrawal_pending(conversation));
                warn!(
                    %conversation,
                    since = %pending.since,
                    "Rejected duplicate withdrawal request"
                );
                RequestOutcome::AlreadyPending
            }
        }
    }

    /// Offer a text message to a pending prompt.
    pub fn offer_reply(&self, conversation: ConversationId, text: &str) -> ReplyOutcome {
        if self.store.take_withdrawal(conversation).is_none() {
            return ReplyOutcome::NotAwaiting;
        }

        match parse_address_reply(text) {
            AddressReply::Accepted(address) => {
                let tx_hash = transaction_hash(&mut rand::thread_rng());
                self.responder.send(template::withdrawal_confirmed(
                    conversation,
                    &address,
                    &tx_hash,
                ));
                info!(%conversation, %address, "Withdrawal confirmed");
                ReplyOutcome::Accepted(address)
            }
            AddressReply::Rejected => {
                info!(%conversation, "Discarded non-address reply to withdrawal prompt");
                ReplyOutcome::Rejected
            }
        }
    }
}
