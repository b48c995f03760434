//! Schema types for the generated API configuration document
//!
//! Every level of the authentication tree is optional. A missing key and an
//! explicit `null` both deserialize to `None` (or an empty list), and unknown
//! keys and provider kinds are tolerated so that documents produced by newer
//! generators still load.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an explicit `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a generated configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WunderGraphConfiguration {
    /// The API described by this document, if any
    #[serde(default)]
    pub api: Option<Api>,
}

/// Root descriptor of a backend API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    /// All authentication mechanisms
    #[serde(default)]
    pub authentication_config: Option<AuthenticationConfig>,
    /// Operations exposed by the API
    #[serde(default, deserialize_with = "null_as_default")]
    pub operations: Vec<Operation>,
    /// Role names available to RBAC directives
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConfig {
    #[serde(default)]
    pub cookie_based: Option<CookieBasedAuthentication>,
    #[serde(default)]
    pub jwks_based: Option<JwksBasedAuthentication>,
    #[serde(default)]
    pub hooks: Option<ApiAuthenticationHooks>,
}

/// Session cookie authentication backed by external identity providers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieBasedAuthentication {
    /// Declared identity providers, in declaration order
    #[serde(default, deserialize_with = "null_as_default")]
    pub providers: Vec<AuthProvider>,
    /// Exact redirect URIs allowed after login
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorized_redirect_uris: Vec<String>,
    /// Regexes for redirect URIs allowed after login
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorized_redirect_uri_regexes: Vec<String>,
}

/// A configured identity source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub kind: AuthProviderKind,
    #[serde(default)]
    pub github_config: Option<GithubAuthProviderConfig>,
    #[serde(default)]
    pub oidc_config: Option<OpenIdConnectAuthProviderConfig>,
}

impl AuthProvider {
    /// Create a provider with no kind-specific settings
    pub fn new(id: impl Into<String>, kind: AuthProviderKind) -> Self {
        Self {
            id: id.into(),
            kind,
            github_config: None,
            oidc_config: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthProviderKind {
    #[serde(rename = "AuthProviderGithub")]
    Github,
    #[serde(rename = "AuthProviderOIDC")]
    OpenIdConnect,
    /// Missing or not recognised by this version
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for AuthProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthProviderKind::Github => write!(f, "github"),
            AuthProviderKind::OpenIdConnect => write!(f, "oidc"),
            AuthProviderKind::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubAuthProviderConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenIdConnectAuthProviderConfig {
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

/// Bearer token verification against JSON Web Key Sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwksBasedAuthentication {
    #[serde(default, deserialize_with = "null_as_default")]
    pub providers: Vec<JwksAuthProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwksAuthProvider {
    pub jwks_url: String,
    #[serde(default)]
    pub user_info_endpoint: Option<String>,
}

/// Which authentication hooks the API has registered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthenticationHooks {
    #[serde(default)]
    pub post_authentication: bool,
    #[serde(default)]
    pub mutating_post_authentication: bool,
    #[serde(default)]
    pub revalidate_authentication: bool,
}

/// An operation exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    pub operation_type: OperationType,
    /// Internal operations are only callable from server code
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub authentication_config: Option<OperationAuthenticationConfig>,
}

impl Operation {
    /// Whether a caller must be authenticated to run this operation
    pub fn requires_authentication(&self) -> bool {
        self.authentication_config
            .as_ref()
            .is_some_and(|auth| auth.required)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationAuthenticationConfig {
    #[serde(default)]
    pub required: bool,
}
