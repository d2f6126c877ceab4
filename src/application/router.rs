//! Command router.
//!
//! Routes inbound events to handlers. Text first goes to an open
//! withdrawal prompt of the same conversation, then to the ordered
//! action patterns. Unmatched text and unknown callbacks are dropped
//! without a reply.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use super::scheduler::CompletionScheduler;
use super::store::ConversationStore;
use super::template;
use super::withdrawal::{ReplyOutcome, RequestOutcome, WithdrawalDialogue};
use crate::domain::{
    deposit_address, Action, ConversationId, InboundEvent, ProfitRange, ENTER_ADDRESS_CALLBACK,
};
use crate::port::inbound::dispatch::{DispatchOutcome, EventHandler, IgnoreReason};
use crate::port::outbound::responder::Responder;

/// Routes chat events to the desk's handlers.
pub struct CommandRouter {
    store: Arc<ConversationStore>,
    scheduler: Arc<CompletionScheduler>,
    responder: Arc<dyn Responder>,
    withdrawal: WithdrawalDialogue,
    profit_range: ProfitRange,
}

impl CommandRouter {
    #[must_use]
    pub fn new(
        store: Arc<ConversationStore>,
        scheduler: Arc<CompletionScheduler>,
        responder: Arc<dyn Responder>,
        profit_range: ProfitRange,
    ) -> Self {
        let withdrawal = WithdrawalDialogue::new(Arc::clone(&store), Arc::clone(&responder));
        Self {
            store,
            scheduler,
            responder,
            withdrawal,
            profit_range,
        }
    }

    /// Shared conversation state.
    #[must_use]
    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Scheduler used for delayed completions.
    #[must_use]
    pub fn scheduler(&self) -> &Arc<CompletionScheduler> {
        &self.scheduler
    }

    /// Process one inbound event.
    pub fn dispatch(&self, event: InboundEvent) -> DispatchOutcome {
        let conversation = event.conversation();
        debug!(%conversation, kind = event.kind(), "Inbound event");

        match event {
            InboundEvent::Callback { data, .. } => self.on_callback(conversation, &data),
            InboundEvent::Command { text, .. } | InboundEvent::FreeText { text, .. } => {
                self.on_text(conversation, &text)
            }
        }
    }

    fn on_text(&self, conversation: ConversationId, text: &str) -> DispatchOutcome {
        match self.withdrawal.offer_reply(conversation, text) {
            ReplyOutcome::Accepted(address) => DispatchOutcome::AddressAccepted { address },
            ReplyOutcome::Rejected => DispatchOutcome::AddressRejected {
                then: self.route(conversation, text),
            },
            ReplyOutcome::NotAwaiting => match self.route(conversation, text) {
                Some(action) => DispatchOutcome::Handled(action),
                None => {
                    debug!(%conversation, "Ignoring unmatched text");
                    DispatchOutcome::Ignored(IgnoreReason::UnmatchedText)
                }
            },
        }
    }

    fn on_callback(&self, conversation: ConversationId, data: &str) -> DispatchOutcome {
        if data != ENTER_ADDRESS_CALLBACK {
            debug!(%conversation, data, "Ignoring unknown callback");
            return DispatchOutcome::Ignored(IgnoreReason::UnknownCallback);
        }

        match self.withdrawal.request_address(conversation) {
            RequestOutcome::Prompted => DispatchOutcome::AddressRequested,
            RequestOutcome::AlreadyPending => DispatchOutcome::WithdrawalAlreadyPending,
        }
    }

    /// Run the first matching action, if any.
    fn route(&self, conversation: ConversationId, text: &str) -> Option<Action> {
        let action = Action::match_text(text)?;
        info!(%conversation, action = action.as_str(), "Handling action");

        match action {
            Action::Start => self.start(conversation),
            Action::Deposit => self.deposit(conversation),
            Action::Trade => self.trade(conversation),
            Action::ToggleTrading => self.toggle(conversation),
            Action::Withdraw => self.withdraw(conversation),
        }
        Some(action)
    }

    fn start(&self, conversation: ConversationId) {
        self.responder.send(template::welcome(conversation));
    }

    fn deposit(&self, conversation: ConversationId) {
        let address = deposit_address(&mut rand::thread_rng());
        self.responder
            .send(template::deposit(conversation, &address));
    }

    fn trade(&self, conversation: ConversationId) {
        let local_time = Local::now().format("%H:%M:%S").to_string();
        self.responder
            .send(template::trade_alert(conversation, &local_time));

        let range = self.profit_range;
        self.scheduler.schedule(conversation, move || {
            let profit = range.sample(&mut rand::thread_rng());
            template::trade_completed(conversation, profit)
        });
    }

    fn toggle(&self, conversation: ConversationId) {
        let active = self.store.toggle_trading();
        info!(%conversation, active, "Trading switched");
        self.responder
            .send(template::trading_switched(conversation, active));
        self.responder
            .send(template::trading_status(conversation, active));
    }

    fn withdraw(&self, conversation: ConversationId) {
        self.responder.send(template::withdraw_offer(conversation));
    }
}

impl EventHandler for CommandRouter {
    fn handle(&self, event: InboundEvent) -> DispatchOutcome {
        self.dispatch(event)
    }
}
