//! API configuration model and inspection
//!
//! This module contains the schema of generated API configuration documents,
//! the cookie-based authentication check, and the features and validation
//! built on top of it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use apiconfig::api::{has_cookie_auth_enabled, load_api_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_api_config("wundergraph.config.json").await?;
//! if has_cookie_auth_enabled(config.api.as_ref()) {
//!     println!("install cookie auth middleware");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cookie_auth;
pub mod features;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main public API
pub use cookie_auth::{cookie_providers, has_cookie_auth_enabled};
pub use features::{AuthFeatures, role_definitions};
pub use loader::{load_api_config, parse_api_config};
pub use types::{
    Api, ApiAuthenticationHooks, AuthProvider, AuthProviderKind, AuthenticationConfig,
    CookieBasedAuthentication, GithubAuthProviderConfig, JwksAuthProvider,
    JwksBasedAuthentication, OpenIdConnectAuthProviderConfig, Operation,
    OperationAuthenticationConfig, OperationType, WunderGraphConfiguration,
};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_api};
