//! Server lifecycle - bind, serve, graceful shutdown
//!
//! Shutdown is cooperative with a hard bound: on Ctrl+C/SIGTERM the
//! listener stops accepting and in-flight requests get up to
//! `SHUTDOWN_GRACE` to finish before the server future is abandoned.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::state::AppState;
use crate::Result;

/// How long in-flight requests get after the shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:2565)
    pub bind_addr: SocketAddr,

    /// Shared secret for the auth gate; `None` disables it.
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 2565)),
            auth_token: None,
        }
    }
}

/// Run the HTTP server. Blocks until shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<()> {
    let state = AppState::new(pool, config.auth_token);
    let app = crate::build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server listening on {}", config.bind_addr);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let mut drain_rx = shutdown_rx.clone();
    let mut signal_rx = shutdown_rx;

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = signal_rx.changed().await;
            tracing::info!("shutdown signal received, draining in-flight requests");
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result?,
        _ = async {
            let _ = drain_rx.changed().await;
            tokio::time::sleep(SHUTDOWN_GRACE).await;
        } => {
            tracing::warn!(
                "drain did not finish within {:?}, abandoning remaining requests",
                SHUTDOWN_GRACE
            );
        }
    }

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 2565);
        assert!(config.auth_token.is_none());
    }
}
