//! Tiered intent routing.
//!
//! # Responsibilities
//! - Store compiled prefix table and keyword tiers
//! - Resolve a task to exactly one decision
//! - Fall back to the configured default target
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Strict precedence: prefix → strong → medium → fallback
//! - Strong tier: first declared route with any hit wins
//! - Medium tier: strictly highest hit count wins, ties keep the earlier route
//! - Deterministic: same input always yields the same decision

use crate::config::loader::ConfigError;
use crate::config::schema::{RouterConfig, DEFAULT_MEDIUM_MIN_MATCHES};
use crate::config::validation::validate_config;
use crate::routing::decision::{Classification, Decision, Strategy};
use crate::routing::matcher::KeywordMatcher;
use crate::routing::prefix::PrefixMap;

/// Confidence reported for a strong-tier hit.
pub const STRONG_CONFIDENCE: f64 = 0.9;

/// Compiled, immutable router.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    prefixes: PrefixMap,
    strong: Vec<KeywordMatcher>,
    medium: Vec<KeywordMatcher>,
    default_target: String,
    auto_route: bool,
}

impl IntentRouter {
    /// Validate `config` and compile it with the built-in prefix table.
    pub fn new(config: &RouterConfig) -> Result<Self, ConfigError> {
        Self::with_prefixes(config, PrefixMap::default())
    }

    /// Validate `config` and compile it with a custom prefix table.
    pub fn with_prefixes(config: &RouterConfig, prefixes: PrefixMap) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Invalid)?;

        Ok(Self {
            prefixes,
            // A single hit decides the strong tier.
            strong: config
                .strong
                .iter()
                .map(|r| KeywordMatcher::from_config(r, 1))
                .collect(),
            medium: config
                .medium
                .iter()
                .map(|r| KeywordMatcher::from_config(r, DEFAULT_MEDIUM_MIN_MATCHES))
                .collect(),
            default_target: config.default_target.trim().to_string(),
            auto_route: config.auto_route,
        })
    }

    /// Decide which target should handle `task`.
    pub fn route(&self, task: &str) -> Decision {
        if let Some(decision) = self.prefixes.resolve(task) {
            return decision;
        }

        if self.auto_route {
            if let Some(classification) = self.classify(task) {
                return classification.into();
            }
        }

        Decision::fallback(&self.default_target)
    }

    /// Keyword classification alone: strong tier, then medium tier.
    pub fn classify(&self, task: &str) -> Option<Classification> {
        let lowered = task.to_lowercase();
        self.classify_strong(&lowered)
            .or_else(|| self.classify_medium(&lowered))
    }

    fn classify_strong(&self, lowered: &str) -> Option<Classification> {
        self.strong.iter().find_map(|route| {
            route.first_hit(lowered).map(|pattern| Classification {
                route: route.name().to_string(),
                target: route.target().to_string(),
                confidence: STRONG_CONFIDENCE,
                reason: format!("strong keyword match: '{pattern}'"),
                strategy: Strategy::Strong,
            })
        })
    }

    fn classify_medium(&self, lowered: &str) -> Option<Classification> {
        let mut best: Option<(&KeywordMatcher, usize)> = None;

        for route in &self.medium {
            let hits = route.count_hits(lowered);
            if hits < route.min_matches() {
                continue;
            }
            if best.map_or(true, |(_, best_hits)| hits > best_hits) {
                best = Some((route, hits));
            }
        }

        best.map(|(route, hits)| Classification {
            route: route.name().to_string(),
            target: route.target().to_string(),
            confidence: route.ratio(hits),
            reason: format!("{hits} medium keywords"),
            strategy: Strategy::Medium,
        })
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    pub fn strong_routes(&self) -> &[KeywordMatcher] {
        &self.strong
    }

    pub fn medium_routes(&self) -> &[KeywordMatcher] {
        &self.medium
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }

    pub fn auto_route(&self) -> bool {
        self.auto_route
    }
}
