//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for deployment values (`PORT`, `RENDER_EXTERNAL_URL`) and the bot token
//! (`TELEGRAM_BOT_TOKEN`), which is never read from the file.
//!
//! # Example
//!
//! ```no_run
//! use chatdesk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::service::{DemoConfig, ServerConfig};
use super::telegram::{TelegramAppConfig, Transport};
use crate::domain::ProfitRange;
use crate::error::{ConfigError, Result};

/// Path the webhook listens on, relative to the public URL.
pub const WEBHOOK_PATH: &str = "/webhook";

/// Longest accepted completion delay (one hour).
const MAX_COMPLETION_DELAY_MS: u64 = 3_600_000;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram channel configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// HTTP listener for health checks and webhooks.
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated desk parameters.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies environment overrides before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An environment override is malformed
    /// - Validation fails
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        // Bot token only ever comes from the environment.
        self.telegram.bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        if let Ok(url) = std::env::var("RENDER_EXTERNAL_URL") {
            if !url.trim().is_empty() {
                self.telegram.public_url = Some(url);
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("`{port}` is not a valid port"),
            })?;
        }

        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be `pretty` or `json`".to_string(),
            }
            .into());
        }
        if self.demo.completion_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion_delay_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.demo.completion_delay_ms > MAX_COMPLETION_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "completion_delay_ms",
                reason: format!("must be at most {MAX_COMPLETION_DELAY_MS}"),
            }
            .into());
        }
        if self.demo.profit_min < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "profit_min",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.demo.profit_max < self.demo.profit_min {
            return Err(ConfigError::InvalidValue {
                field: "profit_max",
                reason: "must be >= profit_min".to_string(),
            }
            .into());
        }

        match &self.telegram.public_url {
            Some(raw) => {
                let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
                    field: "public_url",
                    reason: e.to_string(),
                })?;
                if url.scheme() != "https" {
                    return Err(ConfigError::InvalidValue {
                        field: "public_url",
                        reason: "Telegram requires an https URL".to_string(),
                    }
                    .into());
                }
            }
            None if self.telegram.transport == Transport::Webhook => {
                return Err(ConfigError::MissingField {
                    field: "public_url",
                }
                .into());
            }
            None => {}
        }

        Ok(())
    }

    /// Bot token from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `TELEGRAM_BOT_TOKEN` is unset.
    pub fn bot_token(&self) -> Result<&str> {
        self.telegram.bot_token.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "TELEGRAM_BOT_TOKEN",
            }
            .into()
        })
    }

    /// Full webhook URL, when a public URL is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the public URL does not parse.
    pub fn webhook_url(&self) -> Result<Option<Url>> {
        let Some(raw) = &self.telegram.public_url else {
            return Ok(None);
        };
        let base = Url::parse(raw)?;
        let path = format!("{}{WEBHOOK_PATH}", base.path().trim_end_matches('/'));
        let mut url = base;
        url.set_path(&path);
        Ok(Some(url))
    }

    /// Delay between a trade alert and its completion.
    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.demo.completion_delay_ms)
    }

    /// Range simulated trade profits are drawn from.
    #[must_use]
    pub fn profit_range(&self) -> ProfitRange {
        ProfitRange::new(self.demo.profit_min, self.demo.profit_max).unwrap_or_default()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
