//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Answer history-mode deep links with the route they resolve to
//!
//! # Design Decisions
//! - The route table is compiled once and shared through state
//! - Unmatched paths get a 404 body; choosing a fallback page is the client's job

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::history::HistoryBase;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::routing::{RouteError, RouteTable};

/// Path of the route listing endpoint.
pub const ROUTES_ENDPOINT: &str = "/_routes";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub base: HistoryBase,
}

/// HTTP server resolving request paths against the route table.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, RouteError> {
        let routes = Arc::new(RouteTable::from_config(&config.routes, config.router)?);
        let state = AppState {
            routes,
            base: HistoryBase::new(&config.history.base),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(ROUTES_ENDPOINT, get(handlers::list_routes))
            .route("/", get(handlers::resolve_path))
            .route("/{*path}", get(handlers::resolve_path))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The assembled router, for driving requests without a socket.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.config.routes.len(),
            base = %self.config.history.base,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
