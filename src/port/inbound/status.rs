//! Read-only status port for liveness probes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point-in-time view of the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    /// Whether auto-trading is switched on.
    pub trading_active: bool,
    /// When the snapshot was taken.
    pub now: DateTime<Utc>,
}

/// Read-only access to runtime status.
///
/// Querying status never changes state.
pub trait StatusView: Send + Sync {
    /// Current trading flag.
    fn trading_active(&self) -> bool;

    /// Snapshot stamped with the current time.
    fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            trading_active: self.trading_active(),
            now: Utc::now(),
        }
    }
}
