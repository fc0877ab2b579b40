//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate request ID)
//!     → handlers.rs (load router snapshot, route task)
//!     → JSON decision back to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
