//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Minimum number of distinct keyword hits a medium-tier route needs when
/// its `min_matches` is omitted.
pub const DEFAULT_MEDIUM_MIN_MATCHES: usize = 2;

/// Root configuration for the model router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Target returned when no strategy produces a decision.
    pub default_target: String,

    /// Enable keyword classification. Explicit prefixes apply regardless.
    pub auto_route: bool,

    /// Routes where a single keyword hit is enough, in priority order.
    pub strong: Vec<RouteConfig>,

    /// Routes scored by the number of distinct keyword hits, in priority order.
    pub medium: Vec<RouteConfig>,

    /// HTTP API settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A named keyword rule mapping evidence to a target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Keyword phrases matched as substrings of the lower-cased task.
    pub patterns: Vec<String>,

    /// Model identifier this route selects.
    pub target: String,

    /// Minimum distinct pattern hits. Only meaningful for the medium tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_matches: Option<usize>,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, target: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            target: target.into(),
            min_matches: None,
        }
    }

    pub fn with_min_matches(mut self, min_matches: usize) -> Self {
        self.min_matches = Some(min_matches);
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_target: "kimi".to_string(),
            auto_route: true,
            strong: vec![
                RouteConfig::new(
                    "opus",
                    "opus",
                    &[
                        "architecture",
                        "security review",
                        "threat model",
                        "security audit",
                        "design system",
                    ],
                ),
                RouteConfig::new(
                    "codex",
                    "codex",
                    &[
                        "debug this",
                        "fix this bug",
                        "refactor",
                        "implement function",
                        "write code",
                    ],
                ),
            ],
            medium: vec![
                RouteConfig::new(
                    "opus",
                    "opus",
                    &["design", "complex", "distributed", "scale", "optimize", "evaluate", "analyze"],
                ),
                RouteConfig::new(
                    "codex",
                    "codex",
                    &["code", "function", "bug", "review", "implement", "test"],
                ),
                RouteConfig::new(
                    "kimi",
                    "kimi",
                    &["research", "find", "search", "latest", "what is", "how to", "explain"],
                ),
            ],
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8787").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8787".to_string(),
            request_timeout_secs: 5,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Expose `/metrics` when serving.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
        }
    }
}
