//! HTTP server and demo desk configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Listener for the health endpoint and, in webhook mode, updates.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0).
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port (default: 3000). Overridden by `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl ServerConfig {
    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Parameters of the simulated desk.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Delay before a trade completion is reported (default: 3000).
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
    /// Lower bound of simulated profit in ETH (default: 0.50).
    #[serde(default = "default_profit_min")]
    pub profit_min: Decimal,
    /// Upper bound of simulated profit in ETH (default: 2.50).
    #[serde(default = "default_profit_max")]
    pub profit_max: Decimal,
}

const fn default_completion_delay_ms() -> u64 {
    3000
}

fn default_profit_min() -> Decimal {
    Decimal::new(50, 2)
}

fn default_profit_max() -> Decimal {
    Decimal::new(250, 2)
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: default_completion_delay_ms(),
            profit_min: default_profit_min(),
            profit_max: default_profit_max(),
        }
    }
}
