//! API configuration inspector
//!
//! A Rust library for inspecting generated API configuration documents.
//! Its core is [`api::has_cookie_auth_enabled`], a total check for whether
//! cookie-based authentication is enabled, plus the auth features and
//! validation built on it.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use api::has_cookie_auth_enabled;
pub use errors::{AppError, Result};
