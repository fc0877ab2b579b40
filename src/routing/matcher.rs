//! Keyword matching logic.
//!
//! # Responsibilities
//! - Hold one route's normalized keyword phrases
//! - Report the first phrase found in a task (strong tier)
//! - Count distinct phrases found in a task (medium tier)
//!
//! # Design Decisions
//! - Phrases are lower-cased at compile time; surrounding spaces are part of the phrase
//! - Callers lower-case the task once and pass it to every matcher
//! - Plain substring search, no word boundaries ("test" hits "latest")
//! - A phrase counts at most once however often it occurs

use crate::config::schema::RouteConfig;

/// A compiled keyword route.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    name: String,
    target: String,
    patterns: Vec<String>,
    min_matches: usize,
}

impl KeywordMatcher {
    /// Compile a validated route. `default_min` applies when the route omits `min_matches`.
    pub fn from_config(route: &RouteConfig, default_min: usize) -> Self {
        Self {
            name: route.name.trim().to_string(),
            target: route.target.trim().to_string(),
            patterns: route
                .patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            min_matches: route.min_matches.unwrap_or(default_min),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn min_matches(&self) -> usize {
        self.min_matches
    }

    /// First phrase, in declaration order, contained in `lowered`.
    pub fn first_hit(&self, lowered: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| lowered.contains(p.as_str()))
            .map(String::as_str)
    }

    /// Number of distinct phrases contained in `lowered`.
    pub fn count_hits(&self, lowered: &str) -> usize {
        self.patterns
            .iter()
            .filter(|p| lowered.contains(p.as_str()))
            .count()
    }

    /// `hits / patterns`, in (0, 1] for any eligible hit count.
    pub fn ratio(&self, hits: usize) -> f64 {
        if self.patterns.is_empty() {
            return 0.0;
        }
        hits as f64 / self.patterns.len() as f64
    }
}
