//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "model-router.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

/// Parse configuration text. The format is picked from the path's extension.
pub fn parse_config(path: &Path, content: &str) -> Result<RouterConfig, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let config = match extension.as_deref() {
        Some("toml") => toml::from_str(content)?,
        Some("json") => serde_json::from_str(content)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(config)
}

/// Load and validate configuration from a TOML or JSON file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(path, &content)?;

    validate_config(&config).map_err(ConfigError::Invalid)?;

    Ok(config)
}

/// Resolve the active configuration.
///
/// An explicit path must load. Without one, `model-router.toml` in the
/// working directory is used when present, otherwise the built-in tables.
pub fn load_or_default(path: Option<&Path>) -> Result<(RouterConfig, ConfigSource), ConfigError> {
    if let Some(path) = path {
        let config = load_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        let config = load_config(fallback)?;
        return Ok((config, ConfigSource::File(fallback.to_path_buf())));
    }

    tracing::debug!("No config file found, using built-in defaults");
    Ok((RouterConfig::default(), ConfigSource::BuiltIn))
}
