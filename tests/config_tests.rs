use std::io::Write;
use std::sync::Mutex;

use chatdesk::error::{ConfigError, Error};
use chatdesk::infrastructure::config::settings::Config;
use chatdesk::infrastructure::config::Transport;
use tempfile::NamedTempFile;

/// Mutex to serialize tests that read or modify environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    std::env::remove_var("TELEGRAM_BOT_TOKEN");
    std::env::remove_var("RENDER_EXTERNAL_URL");
    std::env::remove_var("PORT");
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_full_config_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[telegram]
transport = "polling"
dry_run = true

[server]
host = "127.0.0.1"
port = 8088

[demo]
completion_delay_ms = 1000
profit_min = 0.75
profit_max = 1.25
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.telegram.effective_transport(), Transport::Polling);
    assert!(config.telegram.dry_run);
    assert_eq!(config.server.bind_address(), "127.0.0.1:8088");
    assert_eq!(config.completion_delay().as_millis(), 1000);
    assert!(config.profit_range().contains("1.00".parse().unwrap()));
    assert!(!config.profit_range().contains("1.30".parse().unwrap()));
}

#[test]
fn missing_file_is_read_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let result = Config::load("/nonexistent/chatdesk/config.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_toml_is_parse_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config("[server\nport = 1");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn unknown_transport_is_parse_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config("[telegram]\ntransport = \"carrier-pigeon\"\n");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn empty_host_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config("[server]\nhost = \"\"\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField { field: "host" })) => {}
        Err(err) => panic!("Expected missing host error, got {err}"),
        Ok(_) => panic!("Expected missing host error, got Ok"),
    }
}

#[test]
fn negative_profit_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config("[demo]\nprofit_min = -1.0\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "profit_min",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid profit_min error, got {err}"),
        Ok(_) => panic!("Expected invalid profit_min error, got Ok"),
    }
}

#[test]
fn environment_supplies_token_and_url() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    std::env::set_var("TELEGRAM_BOT_TOKEN", "42:secret");
    std::env::set_var("RENDER_EXTERNAL_URL", "https://desk.example.com");

    let file = write_temp_config("");
    let config = Config::load(file.path()).unwrap();
    clear_env();

    assert_eq!(config.bot_token().unwrap(), "42:secret");
    assert_eq!(config.telegram.effective_transport(), Transport::Webhook);
    assert_eq!(
        config.webhook_url().unwrap().unwrap().as_str(),
        "https://desk.example.com/webhook"
    );
}

#[test]
fn missing_token_is_reported() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let file = write_temp_config("");
    let config = Config::load(file.path()).unwrap();
    assert!(matches!(
        config.bot_token(),
        Err(Error::Config(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN"
        }))
    ));
}
