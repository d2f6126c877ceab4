//! Application services (use cases).
//!
//! The conversation core: routing, state, the withdrawal sub-dialogue,
//! delayed completions, and reply templates.

pub mod router;
pub mod scheduler;
pub mod store;
pub mod template;
pub mod withdrawal;

pub use router::CommandRouter;
pub use scheduler::{CompletionScheduler, PendingCompletion, DEFAULT_COMPLETION_DELAY};
pub use store::{AlreadyPending, ConversationStore};
pub use withdrawal::{ReplyOutcome, RequestOutcome, WithdrawalDialogue};
