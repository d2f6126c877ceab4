//! Inbound event handling port used by channel adapters.

use crate::domain::{Action, InboundEvent};

/// Why an event produced no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text matched no route.
    UnmatchedText,
    /// Callback data is not one the desk issues.
    UnknownCallback,
}

/// What the dispatcher did with one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A routed action ran.
    Handled(Action),
    /// The text answered a pending address prompt with a valid address.
    AddressAccepted { address: String },
    /// The text consumed a pending prompt without being an address, and
    /// then fell through to routing with the given result.
    AddressRejected { then: Option<Action> },
    /// The withdrawal prompt was shown and the expectation armed.
    AddressRequested,
    /// A withdrawal prompt was already pending; the request was refused.
    WithdrawalAlreadyPending,
    /// Nothing happened.
    Ignored(IgnoreReason),
}

/// Entry point channel adapters deliver events to.
pub trait EventHandler: Send + Sync {
    /// Process one event. Never fails; problems are logged and replied to.
    fn handle(&self, event: InboundEvent) -> DispatchOutcome;
}
