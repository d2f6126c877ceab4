//! Telegram channel configuration.

use serde::Deserialize;

/// How updates reach the bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Webhook when a public URL is configured, otherwise polling.
    #[default]
    Auto,
    /// Long polling with `getUpdates`.
    Polling,
    /// Push delivery to `<public_url>/webhook`.
    Webhook,
}

impl Transport {
    /// Stable name for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Polling => "polling",
            Self::Webhook => "webhook",
        }
    }
}

/// Telegram channel configuration.
///
/// The bot token is never read from the config file; it comes from the
/// `TELEGRAM_BOT_TOKEN` environment variable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Update delivery mode.
    #[serde(default)]
    pub transport: Transport,
    /// Public base URL used to register the webhook.
    ///
    /// Overridden by `RENDER_EXTERNAL_URL`.
    #[serde(default)]
    pub public_url: Option<String>,
    /// Log replies instead of sending them; no token needed.
    #[serde(default)]
    pub dry_run: bool,
    /// Bot token, loaded from the environment.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl TelegramAppConfig {
    /// Transport after resolving `auto`.
    #[must_use]
    pub fn effective_transport(&self) -> Transport {
        match self.transport {
            Transport::Auto if self.public_url.is_some() => Transport::Webhook,
            Transport::Auto => Transport::Polling,
            other => other,
        }
    }
}
