//! Cookie-based authentication detection
//!
//! Answers whether an API configuration declares at least one cookie-based
//! identity provider. Absence at any level of the configuration tree is a
//! valid "not enabled" answer, never an error.

use super::types::{Api, AuthProvider};

/// Check whether cookie-based authentication is enabled for `api`
///
/// Returns `true` only if the API configuration, its authentication
/// configuration and its cookie-based configuration are all present and at
/// least one provider is declared. Each link is checked in order and the walk
/// stops at the first absent one.
///
/// # Examples
///
/// ```rust
/// use apiconfig::api::{has_cookie_auth_enabled, Api};
///
/// assert!(!has_cookie_auth_enabled(None));
/// assert!(!has_cookie_auth_enabled(Some(&Api::default())));
/// ```
pub fn has_cookie_auth_enabled(api: Option<&Api>) -> bool {
    let Some(api) = api else {
        return false;
    };
    let Some(auth) = api.authentication_config.as_ref() else {
        return false;
    };
    let Some(cookie_based) = auth.cookie_based.as_ref() else {
        return false;
    };
    !cookie_based.providers.is_empty()
}

/// Cookie-based providers declared by `api`, empty if any level is absent
pub fn cookie_providers(api: Option<&Api>) -> &[AuthProvider] {
    api.and_then(|api| api.authentication_config.as_ref())
        .and_then(|auth| auth.cookie_based.as_ref())
        .map(|cookie_based| cookie_based.providers.as_slice())
        .unwrap_or_default()
}

impl Api {
    /// See [`has_cookie_auth_enabled`]
    pub fn has_cookie_auth_enabled(&self) -> bool {
        has_cookie_auth_enabled(Some(self))
    }
}
