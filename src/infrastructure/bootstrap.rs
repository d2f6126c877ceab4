//! Composition root for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::{console, http};
use crate::application::{CommandRouter, CompletionScheduler, ConversationStore};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::dispatch::EventHandler;
use crate::port::inbound::status::StatusView;
use crate::port::outbound::responder::{LogResponder, Responder};

/// The wired conversation core.
pub struct Desk {
    pub store: Arc<ConversationStore>,
    pub scheduler: Arc<CompletionScheduler>,
    pub router: Arc<CommandRouter>,
}

impl Desk {
    /// Router as the inbound port.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn EventHandler> {
        Arc::clone(&self.router) as Arc<dyn EventHandler>
    }

    /// Store as the status port.
    #[must_use]
    pub fn status(&self) -> Arc<dyn StatusView> {
        Arc::clone(&self.store) as Arc<dyn StatusView>
    }

    /// Drop every pending completion.
    pub fn shutdown(&self) {
        let dropped = self.scheduler.cancel_all();
        info!(dropped, "Desk stopped");
    }
}

/// Wire store, scheduler, and router around a responder.
#[must_use]
pub fn build_desk(config: &Config, responder: Arc<dyn Responder>) -> Desk {
    let store = Arc::new(ConversationStore::new());
    let scheduler = Arc::new(CompletionScheduler::new(
        config.completion_delay(),
        Arc::clone(&responder),
    ));
    let router = Arc::new(CommandRouter::new(
        Arc::clone(&store),
        Arc::clone(&scheduler),
        responder,
        config.profit_range(),
    ));
    Desk {
        store,
        scheduler,
        router,
    }
}

/// Run the desk until the channel stops.
///
/// # Errors
///
/// Returns an error if the token is missing outside dry-run mode, the
/// HTTP listener cannot be bound, or the transport fails.
pub async fn run(config: Config) -> Result<()> {
    if config.telegram.dry_run {
        return run_console(&config).await;
    }
    run_telegram(config).await
}

/// Dry run: console input, replies written to the log.
async fn run_console(config: &Config) -> Result<()> {
    info!("Dry-run mode: reading events from stdin, replies go to the log");
    let listener = http::bind(&config.server.bind_address()).await?;
    let desk = build_desk(config, Arc::new(LogResponder));

    let stop = tokio_util::sync::CancellationToken::new();
    let server_stop = stop.clone();
    let server = tokio::spawn(http::serve(
        listener,
        http::health::router(desk.status()),
        async move { server_stop.cancelled().await },
    ));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let result = tokio::select! {
        result = console::run(stdin, desk.handler()) => result.map(|_| ()),
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    desk.shutdown();
    stop.cancel();
    server
        .await
        .map_err(|e| Error::Transport(e.to_string()))??;
    result
}

#[cfg(feature = "telegram")]
async fn run_telegram(config: Config) -> Result<()> {
    use crate::adapter::inbound::telegram;
    use crate::adapter::outbound::telegram::TelegramResponder;
    use crate::infrastructure::config::Transport;
    use teloxide::Bot;
    use tracing::warn;

    let bot = Bot::new(config.bot_token()?);
    let address = config.server.bind_address();
    let listener = http::bind(&address).await?;
    let desk = build_desk(&config, Arc::new(TelegramResponder::new(bot.clone())));

    if let Err(e) = telegram::register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    let health = http::health::router(desk.status());
    let transport = config.telegram.effective_transport();
    info!(transport = transport.as_str(), address = %address, "Starting Telegram channel");

    let result = match (transport, config.webhook_url()?) {
        (Transport::Webhook, Some(url)) => {
            telegram::run_webhook(bot, desk.handler(), listener, url, health).await
        }
        _ => telegram::run_polling(bot, desk.handler(), listener, health).await,
    };

    desk.shutdown();
    result
}

#[cfg(not(feature = "telegram"))]
async fn run_telegram(config: Config) -> Result<()> {
    config.bot_token()?;
    Err(Error::Transport(
        "built without the `telegram` feature; use dry-run mode".into(),
    ))
}
