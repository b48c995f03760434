//! Authentication features derived for code generation
//!
//! Client and server templates need a handful of flags computed from the API
//! configuration: whether login helpers should be emitted, the role union
//! type, and which operations demand an authenticated caller.

use serde::Serialize;

use super::cookie_auth::{cookie_providers, has_cookie_auth_enabled};
use super::types::Api;
use crate::constants::codegen;

/// Auth-related flags consumed by code generation templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthFeatures {
    /// Emit login/logout helpers (cookie-based auth enabled)
    pub has_auth_providers: bool,
    /// Cookie provider ids in declaration order
    pub cookie_provider_ids: Vec<String>,
    /// Roles rendered as a quoted union, e.g. `"admin" | "user"`
    pub role_definitions: String,
    /// Non-internal operations that require authentication
    pub operations_requiring_auth: Vec<String>,
}

impl AuthFeatures {
    /// Derive features from a possibly-absent API configuration
    pub fn from_api(api: Option<&Api>) -> Self {
        let Some(api) = api else {
            return Self::default();
        };

        Self {
            has_auth_providers: has_cookie_auth_enabled(Some(api)),
            cookie_provider_ids: cookie_providers(Some(api))
                .iter()
                .map(|provider| provider.id.clone())
                .collect(),
            role_definitions: role_definitions(&api.roles),
            operations_requiring_auth: api
                .operations
                .iter()
                .filter(|op| !op.internal && op.requires_authentication())
                .map(|op| op.name.clone())
                .collect(),
        }
    }
}

/// Render role names as a quoted union type
pub fn role_definitions(roles: &[String]) -> String {
    roles
        .iter()
        .map(|role| format!("\"{}\"", role))
        .collect::<Vec<_>>()
        .join(codegen::ROLE_UNION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        AuthProvider, AuthProviderKind, AuthenticationConfig, CookieBasedAuthentication,
        Operation, OperationAuthenticationConfig, OperationType,
    };

    fn operation(name: &str, internal: bool, required: bool) -> Operation {
        Operation {
            name: name.to_string(),
            operation_type: OperationType::Query,
            internal,
            authentication_config: Some(OperationAuthenticationConfig { required }),
        }
    }

    #[test]
    fn test_absent_api_has_no_features() {
        assert_eq!(AuthFeatures::from_api(None), AuthFeatures::default());
    }

    #[test]
    fn test_role_definitions() {
        assert_eq!(role_definitions(&[]), "");
        assert_eq!(role_definitions(&["admin".to_string()]), "\"admin\"");
        assert_eq!(
            role_definitions(&["admin".to_string(), "user".to_string()]),
            "\"admin\" | \"user\""
        );
    }

    #[test]
    fn test_features_from_api() {
        let api = Api {
            authentication_config: Some(AuthenticationConfig {
                cookie_based: Some(CookieBasedAuthentication {
                    providers: vec![
                        AuthProvider::new("github", AuthProviderKind::Github),
                        AuthProvider::new("keycloak", AuthProviderKind::OpenIdConnect),
                    ],
                    ..Default::default()
                }),
                ..Default::default()
            }),
            operations: vec![
                operation("Me", false, true),
                operation("Public", false, false),
                operation("InternalSecret", true, true),
            ],
            roles: vec!["admin".to_string()],
        };

        let features = AuthFeatures::from_api(Some(&api));
        assert!(features.has_auth_providers);
        assert_eq!(features.cookie_provider_ids, vec!["github", "keycloak"]);
        assert_eq!(features.role_definitions, "\"admin\"");
        assert_eq!(features.operations_requiring_auth, vec!["Me"]);
    }

    #[test]
    fn test_empty_provider_list_disables_helpers() {
        let api = Api {
            authentication_config: Some(AuthenticationConfig {
                cookie_based: Some(CookieBasedAuthentication::default()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let features = AuthFeatures::from_api(Some(&api));
        assert!(!features.has_auth_providers);
        assert!(features.cookie_provider_ids.is_empty());
    }
}
