//! Handler for the `check` command.

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate configuration without starting the bot.
///
/// # Errors
///
/// Returns an error if the file is invalid, or if no bot token is set
/// outside dry-run mode.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Configuration Check");
    output::field("Config", args.config.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Transport", config.telegram.effective_transport().as_str());
    output::field("Listen", config.server.bind_address());
    if let Some(url) = config.webhook_url()? {
        output::field("Webhook", url);
    }
    output::field("Delay", format!("{} ms", config.demo.completion_delay_ms));
    output::field(
        "Profit",
        format!("{} - {} ETH", config.demo.profit_min, config.demo.profit_max),
    );
    output::field("Dry run", config.telegram.dry_run);

    if config.telegram.bot_token.is_some() {
        output::success("Telegram bot token detected");
    } else if config.telegram.dry_run {
        output::warning("TELEGRAM_BOT_TOKEN not set (not needed for dry runs)");
    } else {
        config.bot_token()?;
    }

    output::success("Configuration check complete");
    Ok(())
}
