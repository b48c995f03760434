//! Prelude module for the API configuration inspector
//!
//! Re-exports the most commonly used items so typical usage needs a single
//! `use apiconfig::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use apiconfig::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let document = load_api_config(DEFAULT_API_CONFIG).await?;
//!     let api = document.api.as_ref();
//!     if has_cookie_auth_enabled(api) {
//!         let features = AuthFeatures::from_api(api);
//!         println!("providers: {:?}", features.cookie_provider_ids);
//!     }
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Schema and inspection
pub use crate::api::{
    Api, AuthFeatures, AuthProvider, AuthProviderKind, AuthenticationConfig,
    CookieBasedAuthentication, ValidationReport, WunderGraphConfiguration, cookie_providers,
    has_cookie_auth_enabled, load_api_config, parse_api_config, validate_api,
};

// Tool configuration
pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DEFAULT_API_CONFIG, ENV_API_CONFIG_PATH};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        let _config = AppConfig::default();
        let document = WunderGraphConfiguration::default();
        assert!(!has_cookie_auth_enabled(document.api.as_ref()));
        assert!(cookie_providers(None).is_empty());
        assert!(!AuthFeatures::from_api(None).has_auth_providers);
    }
}
