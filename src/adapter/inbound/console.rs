//! Local console channel for dry runs.
//!
//! Each stdin line is one event from a single local conversation. A line
//! of the form `callback:<data>` simulates an inline button press; any
//! other line is sent as text.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::domain::{ConversationId, InboundEvent};
use crate::error::Result;
use crate::port::inbound::dispatch::EventHandler;

/// Conversation used for console input.
pub const CONSOLE_CONVERSATION: ConversationId = ConversationId::new(0);

const CALLBACK_PREFIX: &str = "callback:";

/// Parse one input line. Blank lines yield `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<InboundEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    match line.strip_prefix(CALLBACK_PREFIX) {
        Some(data) => Some(InboundEvent::callback(CONSOLE_CONVERSATION, data.trim())),
        None => Some(InboundEvent::from_text(CONSOLE_CONVERSATION, line)),
    }
}

/// Feed lines from `input` to `handler` until end of input.
///
/// Returns the number of events handled.
///
/// # Errors
///
/// Returns an error if reading the input fails.
pub async fn run<R>(input: R, handler: Arc<dyn EventHandler>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    info!(conversation = %CONSOLE_CONVERSATION, "Console channel started");

    let mut lines = input.lines();
    let mut handled = 0;
    while let Some(line) = lines.next_line().await? {
        let Some(event) = parse_line(&line) else {
            continue;
        };
        let outcome = handler.handle(event);
        debug!(?outcome, "Console event handled");
        handled += 1;
    }

    info!(handled, "Console input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::inbound::dispatch::DispatchOutcome;
    use crate::port::IgnoreReason;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<InboundEvent>>);

    impl EventHandler for Collect {
        fn handle(&self, event: InboundEvent) -> DispatchOutcome {
            self.0.lock().push(event);
            DispatchOutcome::Ignored(IgnoreReason::UnmatchedText)
        }
    }

    #[test]
    fn callback_prefix_becomes_callback() {
        assert_eq!(
            parse_line("callback:enter_address"),
            Some(InboundEvent::callback(CONSOLE_CONVERSATION, "enter_address"))
        );
    }

    #[test]
    fn other_lines_are_text() {
        assert!(matches!(
            parse_line("/start"),
            Some(InboundEvent::Command { .. })
        ));
        assert!(matches!(
            parse_line("0xabc"),
            Some(InboundEvent::FreeText { .. })
        ));
        assert_eq!(parse_line("   "), None);
    }

    #[tokio::test]
    async fn feeds_every_non_blank_line() {
        let collect = Arc::new(Collect::default());
        let handler: Arc<dyn EventHandler> = Arc::clone(&collect) as Arc<dyn EventHandler>;

        let input: &[u8] = b"/start\n\ncallback:enter_address\n0xabc\n";
        let handled = run(input, handler).await.unwrap();

        assert_eq!(handled, 3);
        assert_eq!(collect.0.lock().len(), 3);
    }
}
