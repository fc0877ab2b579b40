//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route names a target and carries usable patterns
//! - Validate value ranges (thresholds, timeouts, bind address)
//! - Detect duplicate route names within a tier
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig, DEFAULT_MEDIUM_MIN_MATCHES};

/// Which route table a route was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Medium,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Strong => f.write_str("strong"),
            Tier::Medium => f.write_str("medium"),
        }
    }
}

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_target must not be empty")]
    EmptyDefaultTarget,

    #[error("{tier} route #{index} has an empty name")]
    EmptyRouteName { tier: Tier, index: usize },

    #[error("{tier} route '{route}' has an empty target")]
    EmptyTarget { tier: Tier, route: String },

    #[error("{tier} route '{route}' has no patterns")]
    NoPatterns { tier: Tier, route: String },

    #[error("{tier} route '{route}' has a blank pattern")]
    BlankPattern { tier: Tier, route: String },

    #[error("{tier} route '{route}' lists pattern '{pattern}' more than once")]
    DuplicatePattern {
        tier: Tier,
        route: String,
        pattern: String,
    },

    #[error("{tier} route '{route}' is declared more than once")]
    DuplicateRoute { tier: Tier, route: String },

    #[error("{tier} route '{route}' has min_matches = 0")]
    ZeroMinMatches { tier: Tier, route: String },

    #[error("{tier} route '{route}' requires {min_matches} matches but has only {patterns} patterns")]
    UnreachableMinMatches {
        tier: Tier,
        route: String,
        min_matches: usize,
        patterns: usize,
    },

    #[error("server.request_timeout_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("server.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.default_target.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultTarget);
    }

    validate_tier(Tier::Strong, &config.strong, &mut errors);
    validate_tier(Tier::Medium, &config.medium, &mut errors);

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_tier(tier: Tier, routes: &[RouteConfig], errors: &mut Vec<ValidationError>) {
    let mut seen_names = HashSet::new();

    for (index, route) in routes.iter().enumerate() {
        let name = route.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyRouteName { tier, index });
        } else if !seen_names.insert(name.to_string()) {
            errors.push(ValidationError::DuplicateRoute {
                tier,
                route: name.to_string(),
            });
        }

        if route.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget {
                tier,
                route: route.name.clone(),
            });
        }

        if route.patterns.is_empty() {
            errors.push(ValidationError::NoPatterns {
                tier,
                route: route.name.clone(),
            });
        }

        // Matching is case-insensitive, so "Design" and "design" collide.
        // Padding is significant: " test " and "test" are different phrases.
        let mut seen_patterns = HashSet::new();
        for pattern in &route.patterns {
            let normalized = pattern.to_lowercase();
            if normalized.trim().is_empty() {
                errors.push(ValidationError::BlankPattern {
                    tier,
                    route: route.name.clone(),
                });
            } else if !seen_patterns.insert(normalized.clone()) {
                errors.push(ValidationError::DuplicatePattern {
                    tier,
                    route: route.name.clone(),
                    pattern: normalized,
                });
            }
        }

        if route.min_matches == Some(0) {
            errors.push(ValidationError::ZeroMinMatches {
                tier,
                route: route.name.clone(),
            });
        } else if tier == Tier::Medium && !route.patterns.is_empty() {
            let min = route.min_matches.unwrap_or(DEFAULT_MEDIUM_MIN_MATCHES);
            if min > route.patterns.len() {
                errors.push(ValidationError::UnreachableMinMatches {
                    tier,
                    route: route.name.clone(),
                    min_matches: min,
                    patterns: route.patterns.len(),
                });
            }
        }
    }
}
