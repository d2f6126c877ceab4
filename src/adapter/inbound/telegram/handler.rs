//! Update handler tree.

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, info, warn};

use crate::domain::{bot_commands, ConversationId, InboundEvent};
use crate::port::inbound::dispatch::EventHandler;

/// Handler tree: text messages and callback queries.
///
/// Expects an `Arc<dyn EventHandler>` among the dispatcher's dependencies.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

async fn on_message(msg: Message, handler: Arc<dyn EventHandler>) -> ResponseResult<()> {
    let conversation = conversation_of(msg.chat.id);
    let Some(text) = msg.text() else {
        debug!(%conversation, "Ignoring message without text");
        return Ok(());
    };

    let outcome = handler.handle(InboundEvent::from_text(conversation, text));
    debug!(%conversation, ?outcome, "Message handled");
    Ok(())
}

async fn on_callback(
    bot: Bot,
    query: CallbackQuery,
    handler: Arc<dyn EventHandler>,
) -> ResponseResult<()> {
    // Acknowledge first so the client's spinner stops.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    let chat = query
        .message
        .as_ref()
        .map_or_else(|| ChatId::from(query.from.id), |message| message.chat().id);
    let conversation = conversation_of(chat);

    let Some(data) = query.data else {
        debug!(%conversation, "Ignoring callback without data");
        return Ok(());
    };

    let outcome = handler.handle(InboundEvent::callback(conversation, data));
    debug!(%conversation, ?outcome, "Callback handled");
    Ok(())
}

fn conversation_of(chat: ChatId) -> ConversationId {
    ConversationId::new(chat.0)
}

/// Register bot commands with Telegram for the "/" menu.
///
/// # Errors
///
/// Returns the request error if Telegram rejects the call.
pub async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
