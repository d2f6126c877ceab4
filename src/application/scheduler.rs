//! Delayed completion scheduler.
//!
//! Each scheduled completion is an independent tokio task that sleeps for
//! the configured delay and then sends exactly one message. A registry of
//! pending records, each with its own cancellation token, allows
//! cancellation; records are removed when they fire or are cancelled.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{ConversationId, OutboundMessage};
use crate::port::outbound::responder::Responder;

/// Default delay between a trade alert and its completion.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_secs(3);

/// A completion that has been scheduled but has not fired.
#[derive(Debug, Clone)]
pub struct PendingCompletion {
    pub id: Uuid,
    pub conversation: ConversationId,
    pub fire_at: DateTime<Utc>,
    token: CancellationToken,
}

/// Schedules one-shot deferred messages.
pub struct CompletionScheduler {
    delay: Duration,
    responder: Arc<dyn Responder>,
    pending: Arc<DashMap<Uuid, PendingCompletion>>,
    /// Parent of every completion token; cancelling it stops all of them.
    root: CancellationToken,
}

impl CompletionScheduler {
    #[must_use]
    pub fn new(delay: Duration, responder: Arc<dyn Responder>) -> Self {
        Self {
            delay,
            responder,
            pending: Arc::new(DashMap::new()),
            root: CancellationToken::new(),
        }
    }

    /// Delay applied to every completion.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `build` to run after the delay and send its message.
    ///
    /// The message is built when the timer fires, not now. Must be called
    /// from within a tokio runtime.
    pub fn schedule<F>(&self, conversation: ConversationId, build: F) -> Uuid
    where
        F: FnOnce() -> OutboundMessage + Send + 'static,
    {
        let id = Uuid::new_v4();
        let token = self.root.child_token();
        let fire_at = Utc::now()
            + chrono::Duration::from_std(self.delay).unwrap_or_else(|_| chrono::Duration::zero());

        self.pending.insert(
            id,
            PendingCompletion {
                id,
                conversation,
                fire_at,
                token: token.clone(),
            },
        );

        let pending = Arc::clone(&self.pending);
        let responder = Arc::clone(&self.responder);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    pending.remove(&id);
                    debug!(%id, %conversation, "Completion cancelled");
                }
                () = tokio::time::sleep(delay) => {
                    // A concurrent cancel may have removed the record first.
                    if pending.remove(&id).is_some() {
                        responder.send(build());
                        info!(%id, %conversation, "Completion delivered");
                    }
                }
            }
        });

        debug!(%id, %conversation, %fire_at, "Completion scheduled");
        id
    }

    /// Cancel one completion. Returns false if it already fired.
    pub fn cancel(&self, id: Uuid) -> bool {
        match self.pending.remove(&id) {
            Some((_, completion)) => {
                completion.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel every pending completion of a conversation.
    pub fn cancel_conversation(&self, conversation: ConversationId) -> usize {
        let ids: Vec<Uuid> = self
            .pending
            .iter()
            .filter(|entry| entry.conversation == conversation)
            .map(|entry| entry.id)
            .collect();
        ids.into_iter().filter(|id| self.cancel(*id)).count()
    }

    /// Cancel everything, including completions scheduled afterwards.
    ///
    /// Used on shutdown. Returns how many were pending.
    pub fn cancel_all(&self) -> usize {
        let count = self.pending.len();
        self.root.cancel();
        self.pending.clear();
        if count > 0 {
            info!(count, "Dropped pending completions");
        }
        count
    }

    /// Number of completions waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Sink {
        sent: Mutex<Vec<OutboundMessage>>,
    }

    impl Responder for Sink {
        fn send(&self, message: OutboundMessage) {
            self.sent.lock().push(message);
        }
    }

    const CHAT: ConversationId = ConversationId::new(5);

    fn scheduler(sink: &Arc<Sink>) -> CompletionScheduler {
        let responder: Arc<dyn Responder> = Arc::clone(sink) as Arc<dyn Responder>;
        CompletionScheduler::new(Duration::from_secs(3), responder)
    }

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let sink = Arc::new(Sink::default());
        let scheduler = scheduler(&sink);

        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "done"));
        assert_eq!(scheduler.pending_count(), 1);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        settle().await;
        assert!(sink.sent.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        settle().await;
        assert_eq!(sink.sent.lock().len(), 1);
        assert_eq!(scheduler.pending_count(), 0);

        tokio::time::sleep(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(sink.sent.lock().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn completions_do_not_coalesce() {
        let sink = Arc::new(Sink::default());
        let scheduler = scheduler(&sink);

        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "one"));
        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "two"));
        assert_eq!(scheduler.pending_count(), 2);

        tokio::time::sleep(Duration::from_secs(4)).await;
        settle().await;
        assert_eq!(sink.sent.lock().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_completion_never_fires() {
        let sink = Arc::new(Sink::default());
        let scheduler = scheduler(&sink);

        let id = scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "x"));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));

        tokio::time::sleep(Duration::from_secs(4)).await;
        settle().await;
        assert!(sink.sent.lock().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_conversation_leaves_others() {
        let sink = Arc::new(Sink::default());
        let scheduler = scheduler(&sink);
        let other = ConversationId::new(6);

        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "a"));
        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "b"));
        scheduler.schedule(other, move || OutboundMessage::plain(other, "c"));

        assert_eq!(scheduler.cancel_conversation(CHAT), 2);

        tokio::time::sleep(Duration::from_secs(4)).await;
        settle().await;
        let sent = sink.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].conversation, other);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_drops_everything() {
        let sink = Arc::new(Sink::default());
        let scheduler = scheduler(&sink);

        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "a"));
        scheduler.schedule(CHAT, || OutboundMessage::plain(CHAT, "b"));
        assert_eq!(scheduler.cancel_all(), 2);

        tokio::time::sleep(Duration::from_secs(4)).await;
        settle().await;
        assert!(sink.sent.lock().is_empty());
    }
}
