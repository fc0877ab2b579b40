//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON) or built-in tables
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → compiled into an IntentRouter
//!
//! While serving:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<IntentRouter>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_or_default, ConfigError, ConfigSource};
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
pub use schema::ServerConfig;
pub use validation::{Tier, ValidationError};
