//! Health probe.
//!
//! `GET /health` answers 200 with the trading flag and a timestamp. It only
//! reads state, so repeated probes never change anything.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::port::inbound::status::StatusView;

/// Route the probe is mounted at.
pub const HEALTH_PATH: &str = "/health";

/// Body of a health response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub trading_active: bool,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// Router serving the health probe.
pub fn router(status: Arc<dyn StatusView>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .with_state(status)
}

async fn health(State(status): State<Arc<dyn StatusView>>) -> Json<HealthResponse> {
    let snapshot = status.snapshot();
    Json(HealthResponse {
        status: "ok",
        trading_active: snapshot.trading_active,
        timestamp: snapshot.now.to_rfc3339(),
    })
}
