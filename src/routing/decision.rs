//! Routing decision types.

use serde::Serialize;

/// What the caller should do with its current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Hand the task to `target`.
    Switch,
    /// Stay on the current/default target.
    Continue,
}

/// The strategy that produced a decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Prefix,
    Strong,
    Medium,
    #[default]
    Fallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Prefix => "prefix",
            Strategy::Strong => "strong",
            Strategy::Medium => "medium",
            Strategy::Fallback => "fallback",
        }
    }
}

/// Result of keyword classification (strong or medium tier).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Name of the route that matched.
    pub route: String,
    /// Target of that route.
    pub target: String,
    /// 0.9 for strong hits, hits/patterns for medium hits.
    pub confidence: f64,
    pub reason: String,
    pub strategy: Strategy,
}

/// The routing decision handed to callers.
///
/// Serializes as `{ action, target, reason, confidence? }`. Output only: the
/// strategy is not on the wire, so a decision cannot be read back faithfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub target: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip)]
    pub strategy: Strategy,
}

impl Decision {
    /// Switch to `target`.
    pub fn switch(
        target: impl Into<String>,
        reason: impl Into<String>,
        confidence: f64,
        strategy: Strategy,
    ) -> Self {
        Self {
            action: Action::Switch,
            target: target.into(),
            reason: reason.into(),
            confidence: Some(confidence),
            strategy,
        }
    }

    /// Keep the default target.
    pub fn fallback(default_target: impl Into<String>) -> Self {
        Self {
            action: Action::Continue,
            target: default_target.into(),
            reason: "no route match, using default".to_string(),
            confidence: None,
            strategy: Strategy::Fallback,
        }
    }

    pub fn is_switch(&self) -> bool {
        self.action == Action::Switch
    }
}

impl From<Classification> for Decision {
    fn from(c: Classification) -> Self {
        Decision::switch(c.target, c.reason, c.confidence, c.strategy)
    }
}
