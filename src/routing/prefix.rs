//! Explicit prefix directives.
//!
//! # Responsibilities
//! - Recognize a leading `/<alias> ` directive in the task text
//! - Map the alias to a target through a fixed table
//!
//! # Design Decisions
//! - Aliases are ASCII word characters (`[A-Za-z0-9_]+`), followed by whitespace
//! - Alias lookup is case-insensitive
//! - Unknown aliases are ignored, never an error
//! - Hand-rolled scan instead of regex: one pass over the first token

use std::collections::HashMap;

use crate::routing::decision::{Decision, Strategy};

/// Built-in alias table.
pub const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("code", "codex"),
    ("research", "kimi"),
    ("deep", "opus"),
    ("fast", "haiku"),
    ("cheap", "kimi-free"),
];

/// Fixed mapping from short alias to target identifier.
#[derive(Debug, Clone)]
pub struct PrefixMap {
    aliases: HashMap<String, String>,
}

impl PrefixMap {
    pub fn new<I, A, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, T)>,
        A: Into<String>,
        T: Into<String>,
    {
        Self {
            aliases: entries
                .into_iter()
                .map(|(alias, target)| (alias.into().to_ascii_lowercase(), target.into()))
                .collect(),
        }
    }

    /// Target for an alias, if known.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases
            .get(&alias.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Aliases sorted by name, for display.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .aliases
            .iter()
            .map(|(a, t)| (a.as_str(), t.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Resolve an explicit prefix directive into a switch decision.
    pub fn resolve(&self, text: &str) -> Option<Decision> {
        let alias = parse_alias(text)?;
        let target = self.get(alias)?;
        Some(Decision::switch(
            target,
            format!("explicit prefix /{}", alias.to_ascii_lowercase()),
            1.0,
            Strategy::Prefix,
        ))
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().copied())
    }
}

/// Extract `alias` from text of the form `/alias<whitespace>...`.
pub fn parse_alias(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let (alias, tail) = rest.split_at(end);
    match tail.chars().next() {
        Some(c) if is_separator(c) => Some(alias),
        _ => None,
    }
}

/// Whitespace that may follow an alias: Unicode `White_Space` without NEL
/// (U+0085), plus the byte order mark.
fn is_separator(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}
