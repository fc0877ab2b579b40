//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind server to listener
//! - Swap in recompiled routers as config updates arrive
//! - Warn when an update changes settings that only apply at startup
//! - Stop on shutdown signal, draining in-flight requests

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ObservabilityConfig, RouterConfig, ServerConfig};
use crate::http::handlers::{get_health, get_metrics, get_routes, route_task};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::routing::IntentRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current router snapshot. Each request loads it once.
    pub router: Arc<ArcSwap<IntentRouter>>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(router: IntentRouter, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            router: Arc::new(ArcSwap::from_pointee(router)),
            metrics,
        }
    }

    /// Compile `config` and make it the active router.
    ///
    /// On error the previous router stays active.
    pub fn apply_config(&self, config: &RouterConfig) -> Result<(), crate::config::ConfigError> {
        let router = IntentRouter::new(config)?;
        self.router.store(Arc::new(router));
        Ok(())
    }
}

/// HTTP server for the routing API.
pub struct HttpServer {
    app: Router,
    state: AppState,
    server: ServerConfig,
    observability: ObservabilityConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a router compiled from `config`.
    ///
    /// The `server` and `observability` sections are fixed for the lifetime
    /// of the server.
    pub fn new(
        router: IntentRouter,
        config: &RouterConfig,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        let state = AppState::new(router, metrics);
        let app = Self::build_router(&config.server, state.clone());
        Self {
            app,
            state,
            server: config.server.clone(),
            observability: config.observability.clone(),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/route", post(route_task))
            .route("/routes", get(get_routes))
            .route("/health", get(get_health))
            .route("/metrics", get(get_metrics))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request.headers())
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Shared state, for swapping routers from outside the server.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the server until `shutdown` fires.
    ///
    /// Configurations received on `config_updates` replace the active router.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<RouterConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        let (server, observability) = (self.server, self.observability);
        let reloader = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                match state.apply_config(&config) {
                    Ok(()) => {
                        metrics::record_config_reload("applied");
                        tracing::info!(
                            strong = config.strong.len(),
                            medium = config.medium.len(),
                            default_target = %config.default_target,
                            "Router configuration reloaded"
                        );
                        let ignored = startup_only_changes(&server, &observability, &config);
                        if !ignored.is_empty() {
                            tracing::warn!(
                                sections = ?ignored,
                                "Reloaded config changes settings that only apply at startup, restart to apply them"
                            );
                        }
                    }
                    Err(e) => {
                        metrics::record_config_reload("rejected");
                        tracing::error!(error = %e, "Rejected configuration update");
                    }
                }
            }
        });

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Sections of `update` that differ from the running settings.
///
/// Only the route tables are swapped on reload, so these changes are ignored.
pub fn startup_only_changes(
    server: &ServerConfig,
    observability: &ObservabilityConfig,
    update: &RouterConfig,
) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if &update.server != server {
        changed.push("server");
    }
    if &update.observability != observability {
        changed.push("observability");
    }
    changed
}
