//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics endpoint when enabled
//! - Compile the route table and build the HTTP server
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;
use crate::routing::RouteError;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Routes(#[from] RouteError),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the server with `config` until `shutdown` is triggered.
pub async fn run(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
