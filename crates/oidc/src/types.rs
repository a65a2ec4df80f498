//! Provider settings for Azure AD B2C logins
//!
//! The settings mirror what an administrator saves for the identity provider:
//! client credentials, the authorization endpoint of the user flow, and the
//! optional endpoint overrides and locale passthrough.

use serde::{Deserialize, Serialize};

/// Administrator-saved configuration for an Azure AD B2C identity provider
///
/// Loaded once per authentication attempt from the host's storage (see
/// [`crate::loader`]) and treated as immutable afterwards. Call
/// [`validate`](ProviderSettings::validate) before resolving endpoints or
/// building an authorization URL; resolution assumes validated input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// OAuth client ID issued by the B2C tenant
    pub client_id: String,

    /// OAuth client secret issued by the B2C tenant
    pub client_secret: String,

    /// Authorization endpoint of the user flow
    pub authorization_endpoint: String,

    /// Use `token_endpoint_override` instead of deriving the token endpoint
    /// from the authorization endpoint
    #[serde(default)]
    pub token_endpoint_override_enabled: bool,

    /// Explicit token endpoint, used verbatim when the override is enabled
    #[serde(default)]
    pub token_endpoint_override: String,

    /// Whether the host calls a userinfo endpoint after token exchange
    #[serde(default)]
    pub userinfo_endpoint_enabled: bool,

    /// Userinfo endpoint, present only when enabled
    #[serde(default)]
    pub userinfo_endpoint: String,

    /// Forward the user's current locale on the authorization request
    #[serde(default)]
    pub language_exchange_enabled: bool,

    /// Query parameter name carrying the locale
    #[serde(default = "default_language_parameter")]
    pub language_parameter_name: String,

    /// Scopes requested at login, space-joined for the `scope` parameter
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    /// Fail instead of falling back when the authorization endpoint has no
    /// `/authorize` segment to derive the token endpoint from
    #[serde(default)]
    pub strict_token_derivation: bool,
}

pub(crate) fn default_language_parameter() -> String {
    "language".to_string()
}

pub(crate) fn default_scopes() -> Vec<String> {
    vec!["openid".to_string(), "email".to_string()]
}

impl ProviderSettings {
    /// Create settings for an Azure AD B2C tenant and user flow using the
    /// well-known `b2clogin.com` endpoint layout.
    ///
    /// The token endpoint is left to derivation (`/authorize` → `/token`),
    /// which matches the layout B2C publishes for its user flows.
    pub fn azure_b2c(
        tenant: &str,
        user_flow: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authorization_endpoint: format!(
                "https://{tenant}.b2clogin.com/{tenant}.onmicrosoft.com/{user_flow}/oauth2/v2.0/authorize"
            ),
            token_endpoint_override_enabled: false,
            token_endpoint_override: String::new(),
            userinfo_endpoint_enabled: false,
            userinfo_endpoint: String::new(),
            language_exchange_enabled: false,
            language_parameter_name: default_language_parameter(),
            scopes: default_scopes(),
            strict_token_derivation: false,
        }
    }

    /// Get scopes as space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}
