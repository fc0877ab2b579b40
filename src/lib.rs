//! Rule-based model router library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{Decision, IntentRouter};
