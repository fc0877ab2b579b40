use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{Decision, IntentRouter, KeywordMatcher};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RouteRequest {
    /// Missing or empty tasks route to the default target.
    #[serde(default)]
    pub task: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PrefixEntry {
    pub alias: String,
    pub target: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub target: String,
    pub patterns: Vec<String>,
    pub min_matches: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RoutesSnapshot {
    pub default_target: String,
    pub auto_route: bool,
    pub prefixes: Vec<PrefixEntry>,
    pub strong: Vec<RouteSummary>,
    pub medium: Vec<RouteSummary>,
}

impl From<&IntentRouter> for RoutesSnapshot {
    fn from(router: &IntentRouter) -> Self {
        let summarize = |routes: &[KeywordMatcher]| -> Vec<RouteSummary> {
            routes
                .iter()
                .map(|r| RouteSummary {
                    name: r.name().to_string(),
                    target: r.target().to_string(),
                    patterns: r.patterns().to_vec(),
                    min_matches: r.min_matches(),
                })
                .collect()
        };

        Self {
            default_target: router.default_target().to_string(),
            auto_route: router.auto_route(),
            prefixes: router
                .prefixes()
                .entries()
                .into_iter()
                .map(|(alias, target)| PrefixEntry {
                    alias: alias.to_string(),
                    target: target.to_string(),
                })
                .collect(),
            strong: summarize(router.strong_routes()),
            medium: summarize(router.medium_routes()),
        }
    }
}

pub async fn route_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RouteRequest>,
) -> Json<Decision> {
    let start = Instant::now();
    let router = state.router.load();
    let decision = router.route(&request.task);

    metrics::record_decision(&decision, start);
    tracing::debug!(
        request_id = %request_id(&headers),
        action = ?decision.action,
        target = %decision.target,
        strategy = decision.strategy.as_str(),
        "Task routed"
    );

    Json(decision)
}

pub async fn get_routes(State(state): State<AppState>) -> Json<RoutesSnapshot> {
    let router = state.router.load();
    Json(RoutesSnapshot::from(&**router))
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

pub async fn get_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}
