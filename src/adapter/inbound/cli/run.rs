//! Handler for the `run` command.

use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the desk fails.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args);

    config.init_logging();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = config.telegram.effective_transport().as_str(),
        dry_run = config.telegram.dry_run,
        "chatdesk starting"
    );

    bootstrap::run(config).await?;
    info!("chatdesk stopped");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if args.dry_run {
        config.telegram.dry_run = true;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}
