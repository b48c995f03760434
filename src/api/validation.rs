//! Validation of authentication settings in an API configuration
//!
//! Validation collects every issue it finds instead of stopping at the first
//! one. Provider contents and provider uniqueness are not checked.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::cookie_auth::has_cookie_auth_enabled;
use super::types::Api;
use crate::errors::ValidationError;

/// How serious a validation issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single problem found in an API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The document has no API section
    MissingApi,
    /// Operations require authentication but no mechanism can authenticate callers
    AuthRequiredWithoutProviders { operations: Vec<String> },
    /// Redirect URIs or URI regexes are configured but cookie auth is disabled
    RedirectUrisWithoutCookieAuth,
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::MissingApi => Severity::Warning,
            ValidationIssue::AuthRequiredWithoutProviders { .. } => Severity::Error,
            ValidationIssue::RedirectUrisWithoutCookieAuth => Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingApi => write!(f, "configuration has no api section"),
            ValidationIssue::AuthRequiredWithoutProviders { operations } => write!(
                f,
                "operations require authentication but no cookie-based or JWKS provider is configured: {}",
                operations.join(", ")
            ),
            ValidationIssue::RedirectUrisWithoutCookieAuth => write!(
                f,
                "authorized redirect URIs or URI regexes are set but cookie-based authentication has no providers"
            ),
        }
    }
}

/// Outcome of validating an API configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub cookie_auth_enabled: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Fail if any error-level issue was found
    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.has_errors() {
            let issues = self.issues.into_iter().filter(|i| i.is_error()).collect();
            return Err(ValidationError::Failed { issues });
        }
        Ok(self)
    }
}

/// Validate authentication settings of a possibly-absent API configuration
pub fn validate_api(api: Option<&Api>) -> ValidationReport {
    let cookie_auth_enabled = has_cookie_auth_enabled(api);
    debug!("Cookie-based authentication enabled: {}", cookie_auth_enabled);

    let mut report = ValidationReport {
        cookie_auth_enabled,
        issues: Vec::new(),
    };

    let Some(api) = api else {
        report.issues.push(ValidationIssue::MissingApi);
        return report;
    };

    let auth = api.authentication_config.as_ref();
    let jwks_enabled = auth
        .and_then(|auth| auth.jwks_based.as_ref())
        .is_some_and(|jwks| !jwks.providers.is_empty());

    let requiring_auth: Vec<String> = api
        .operations
        .iter()
        .filter(|op| !op.internal && op.requires_authentication())
        .map(|op| op.name.clone())
        .collect();

    if !requiring_auth.is_empty() && !cookie_auth_enabled && !jwks_enabled {
        report
            .issues
            .push(ValidationIssue::AuthRequiredWithoutProviders {
                operations: requiring_auth,
            });
    }

    let has_redirect_uris = auth
        .and_then(|auth| auth.cookie_based.as_ref())
        .is_some_and(|cookie| {
            !cookie.authorized_redirect_uris.is_empty()
                || !cookie.authorized_redirect_uri_regexes.is_empty()
        });
    if has_redirect_uris && !cookie_auth_enabled {
        report
            .issues
            .push(ValidationIssue::RedirectUrisWithoutCookieAuth);
    }

    for issue in &report.issues {
        warn!("API configuration issue: {}", issue);
    }

    report
}
