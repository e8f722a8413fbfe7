//! HTTP hosting shell for the error classification pipeline
//!
//! The shell owns the two extension points the core is wired into: the
//! failure seam (`failure::failure_response` — record on the span, then
//! translate) and the response-finalization middleware that stamps
//! `traceparent` on every outgoing response.

mod failure;
mod health;
mod routes;
mod trace_context;

use std::net::SocketAddr;

use axum::Router;
use beacon_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
#[derive(Debug)]
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured health path collides with a
    /// registered route (axum panics on overlapping paths)
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 4000)));

        let mut app = routes::router();

        // Health check
        if config.server.health.enabled {
            let path = config.server.health.path.as_str();
            if routes::RESERVED_PATHS.contains(&path) {
                anyhow::bail!("server.health.path `{path}` collides with an existing route");
            }
            app = app.route(path, axum::routing::get(health::health_handler));
        }

        // Apply middleware layers (innermost first)

        // Trace-context stamping runs inside the request span, after the
        // response is built and before it is written
        app = app.layer(axum::middleware::from_fn(trace_context::trace_context_middleware));

        // Per-request tracing span (outermost)
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
