//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! GET /animelist?user=<name>
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (add request ID)
//!     → handlers.rs (orchestrate fetch → filter → sort → map)
//!     → JSON array response
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
