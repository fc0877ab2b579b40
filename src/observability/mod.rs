//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing decisions, reloads, HTTP requests produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → `/metrics` endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through HTTP spans
//! - The routing core never logs or records; callers do

pub mod logging;
pub mod metrics;
