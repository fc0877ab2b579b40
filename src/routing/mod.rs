//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Task text
//!     → prefix.rs (explicit `/alias ` directive)
//!     → router.rs (strong tier, then medium tier)
//!     → matcher.rs (substring hits per route)
//!     → Return: Decision (switch or continue)
//!
//! Route Compilation (at startup / reload):
//!     RouterConfig
//!     → Validate
//!     → Normalize patterns (lower-case)
//!     → Freeze as immutable IntentRouter
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at runtime
//! - No regex in hot path (substring and prefix scans only)
//! - Deterministic: same input always yields the same decision
//! - First strategy with a result wins

pub mod decision;
pub mod matcher;
pub mod prefix;
pub mod router;

pub use decision::{Action, Classification, Decision, Strategy};
pub use matcher::KeywordMatcher;
pub use prefix::PrefixMap;
pub use router::IntentRouter;
