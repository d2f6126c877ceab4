//! Canonical test configurations.

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::bootstrap::{build_desk, Desk};
use crate::infrastructure::config::settings::Config;
use crate::testkit::responder::RecordingResponder;

/// Default config in dry-run mode, without touching the environment.
#[must_use]
pub fn dry_run() -> Config {
    let mut config = Config::default();
    config.telegram.dry_run = true;
    config
}

/// Dry-run config with the given completion delay.
#[must_use]
pub fn with_delay(delay: Duration) -> Config {
    let mut config = dry_run();
    config.demo.completion_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    config
}

/// Desk wired to a fresh recording responder.
#[must_use]
pub fn recording_desk(config: &Config) -> (Desk, RecordingResponder) {
    let responder = RecordingResponder::new();
    let desk = build_desk(config, Arc::new(responder.clone()));
    (desk, responder)
}
