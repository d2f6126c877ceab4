//! Conversation state store.
//!
//! Holds the process-wide trading flag and per-conversation withdrawal
//! expectations. An expectation entry is created the first time a
//! conversation asks for an address and lives until the process exits.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{ConversationId, WithdrawalState};
use crate::port::inbound::status::StatusView;

/// Returned when a conversation already has an open address prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyPending {
    pub since: DateTime<Utc>,
}

/// Shared, thread-safe conversation state.
pub struct ConversationStore {
    /// Market-wide auto-trading switch.
    trading_active: AtomicBool,
    /// Withdrawal state keyed by conversation id.
    withdrawals: DashMap<ConversationId, WithdrawalState>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            trading_active: AtomicBool::new(false),
            withdrawals: DashMap::new(),
        }
    }

    /// Current trading switch.
    #[must_use]
    pub fn trading_active(&self) -> bool {
        self.trading_active.load(Ordering::Acquire)
    }

    /// Flip the trading switch and return the new value.
    pub fn toggle_trading(&self) -> bool {
        !self.trading_active.fetch_xor(true, Ordering::AcqRel)
    }

    /// Arm the address expectation for a conversation.
    ///
    /// Fails without changing state when one is already armed.
    pub fn arm_withdrawal(&self, conversation: ConversationId) -> Result<(), AlreadyPending> {
        let mut entry = self
            .withdrawals
            .entry(conversation)
            .or_insert(WithdrawalState::Idle);

        if let WithdrawalState::AwaitingAddress { since } = *entry {
            return Err(AlreadyPending { since });
        }
        *entry = WithdrawalState::AwaitingAddress { since: Utc::now() };
        Ok(())
    }

    /// Consume the address expectation, returning when it was armed.
    ///
    /// Returns `None` when the conversation was idle. Consumption is
    /// atomic: two concurrent callers never both receive `Some`.
    pub fn take_withdrawal(&self, conversation: ConversationId) -> Option<DateTime<Utc>> {
        match self.withdrawals.entry(conversation) {
            Entry::Occupied(mut entry) => {
                match std::mem::replace(entry.get_mut(), WithdrawalState::Idle) {
                    WithdrawalState::AwaitingAddress { since } => Some(since),
                    WithdrawalState::Idle => None,
                }
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Current withdrawal state for a conversation.
    #[must_use]
    pub fn withdrawal_state(&self, conversation: ConversationId) -> WithdrawalState {
        self.withdrawals
            .get(&conversation)
            .map_or(WithdrawalState::Idle, |state| *state)
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusView for ConversationStore {
    fn trading_active(&self) -> bool {
        ConversationStore::trading_active(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const A: ConversationId = ConversationId::new(1);
    const B: ConversationId = ConversationId::new(2);

    #[test]
    fn trading_starts_stopped() {
        let store = ConversationStore::new();
        assert!(!store.trading_active());
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let store = ConversationStore::new();
        assert!(store.toggle_trading());
        assert!(store.trading_active());
        assert!(!store.toggle_trading());
        assert!(!store.trading_active());
    }

    #[test]
    fn concurrent_toggles_never_tear() {
        let store = Arc::new(ConversationStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        store.toggle_trading();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // 8000 flips is even.
        assert!(!store.trading_active());
    }

    #[test]
    fn arm_then_take_consumes_once() {
        let store = ConversationStore::new();
        store.arm_withdrawal(A).unwrap();
        assert!(matches!(
            store.withdrawal_state(A),
            WithdrawalState::AwaitingAddress { .. }
        ));

        assert!(store.take_withdrawal(A).is_some());
        assert!(store.take_withdrawal(A).is_none());
        assert_eq!(store.withdrawal_state(A), WithdrawalState::Idle);
    }

    #[test]
    fn second_arm_is_rejected_and_keeps_original() {
        let store = ConversationStore::new();
        store.arm_withdrawal(A).unwrap();
        let WithdrawalState::AwaitingAddress { since } = store.withdrawal_state(A) else {
            panic!("expected awaiting state");
        };

        let err = store.arm_withdrawal(A).unwrap_err();
        assert_eq!(err.since, since);
        assert_eq!(store.withdrawal_state(A), WithdrawalState::AwaitingAddress { since });
    }

    #[test]
    fn expectations_are_scoped_per_conversation() {
        let store = ConversationStore::new();
        store.arm_withdrawal(A).unwrap();

        assert!(store.take_withdrawal(B).is_none());
        assert!(matches!(
            store.withdrawal_state(A),
            WithdrawalState::AwaitingAddress { .. }
        ));
        assert_eq!(store.withdrawal_state(B), WithdrawalState::Idle);
    }

    #[test]
    fn take_on_unknown_conversation_leaves_it_idle() {
        let store = ConversationStore::new();
        assert!(store.take_withdrawal(A).is_none());
        assert_eq!(store.withdrawal_state(A), WithdrawalState::Idle);
        assert!(store.arm_withdrawal(A).is_ok());
    }

    #[test]
    fn snapshot_reports_flag() {
        let store = ConversationStore::new();
        store.toggle_trading();
        let snapshot = store.snapshot();
        assert!(snapshot.trading_active);
    }
}
