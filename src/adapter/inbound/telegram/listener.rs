//! Update delivery: long polling or webhook.

use std::sync::Arc;

use axum::Router;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{self, Options};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use url::Url;

use super::handler::schema;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::port::inbound::dispatch::EventHandler;

/// Receive updates with `getUpdates` until Ctrl-C.
///
/// `side` (the health router) is served on `listener` alongside.
///
/// # Errors
///
/// Returns an error if the HTTP server fails.
pub async fn run_polling(
    bot: Bot,
    handler: Arc<dyn EventHandler>,
    listener: TcpListener,
    side: Router,
) -> Result<()> {
    let stop = CancellationToken::new();
    let server_stop = stop.clone();

    let mut dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build();

    info!("Telegram polling started");
    let dispatch = async {
        dispatcher.dispatch().await;
        stop.cancel();
    };
    let server = http::serve(listener, side, async move {
        server_stop.cancelled().await;
    });

    let ((), served) = tokio::join!(dispatch, server);
    served
}

/// Receive updates pushed to `url` until Ctrl-C.
///
/// The webhook route and `side` share `listener`.
///
/// # Errors
///
/// Returns an error if the webhook cannot be registered or the HTTP
/// server fails.
pub async fn run_webhook(
    bot: Bot,
    handler: Arc<dyn EventHandler>,
    listener: TcpListener,
    url: Url,
    side: Router,
) -> Result<()> {
    let socket = listener.local_addr()?;

    info!(url = %url, "Registering Telegram webhook");
    let (updates, stop_flag, webhook) =
        webhooks::axum_to_router(bot.clone(), Options::new(socket, url)).await?;

    let mut dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build();

    let dispatch = dispatcher.dispatch_with_listener(
        updates,
        LoggingErrorHandler::with_custom_text("Webhook listener error"),
    );
    let server = http::serve(listener, webhook.merge(side), stop_flag);

    let ((), served) = tokio::join!(dispatch, server);
    served
}
