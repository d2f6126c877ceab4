//! HTTP listener shared by the health probe and the webhook endpoint.

pub mod health;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

/// Bind `address` before any channel starts.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn bind(address: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "HTTP listener bound");
    Ok(listener)
}

/// Serve `router` on a bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
