//! Authorization request construction
//!
//! Builds the redirect target that initiates a login: the resolved
//! authorization endpoint plus the standard OIDC query parameters and,
//! when language exchange is enabled, the locale passthrough parameter.
//! Issuing the HTTP redirect and suppressing response caching for it are
//! host responsibilities.

use tracing::debug;
use url::Url;

use crate::endpoints::ResolvedEndpoints;
use crate::error::Result;
use crate::traits::{LocaleResolver, StateTokenProvider};
use crate::types::ProviderSettings;

/// Query parameters attached to one authorization redirect
///
/// Constructed fresh per login attempt; `state` is single-use.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth response type, `code` for the authorization code flow
    pub response_type: String,
    /// Requested scopes, space-separated
    pub scope: String,
    /// Absolute callback URL registered with the provider
    pub redirect_uri: String,
    /// Single-use CSRF state token
    pub state: String,
    /// Additional parameters, appended after the standard set
    pub extra_params: Vec<(String, String)>,
}

impl AuthorizationRequest {
    /// Serialize onto the authorization endpoint.
    ///
    /// Query parameters the configured endpoint already carries (B2C user
    /// flow endpoints may include `?p=...`) are preserved; the request's
    /// pairs are appended after them, percent-encoded.
    #[must_use]
    pub fn to_url(&self, authorization_endpoint: &Url) -> Url {
        let mut url = authorization_endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("client_id", &self.client_id);
            pairs.append_pair("response_type", &self.response_type);
            pairs.append_pair("scope", &self.scope);
            pairs.append_pair("redirect_uri", &self.redirect_uri);
            pairs.append_pair("state", &self.state);
            for (name, value) in &self.extra_params {
                pairs.append_pair(name, value);
            }
        }
        url
    }
}

/// Build the authorization URL for one login attempt.
///
/// `settings` must have passed [`ProviderSettings::validate`]; construction
/// does not re-check fields. The language parameter is appended alongside
/// the standard parameters when language exchange is enabled and the host
/// supplied a locale; without a locale it is omitted entirely.
///
/// Identical inputs build identical URLs; only the caller-supplied `state`
/// varies between attempts.
#[must_use]
pub fn build_authorization_url(
    settings: &ProviderSettings,
    endpoints: &ResolvedEndpoints,
    redirect_uri: &Url,
    state: &str,
    locale: Option<&str>,
) -> Url {
    let mut request = AuthorizationRequest {
        client_id: settings.client_id.clone(),
        response_type: "code".to_string(),
        scope: settings.scope_string(),
        redirect_uri: redirect_uri.to_string(),
        state: state.to_string(),
        extra_params: Vec::new(),
    };

    if settings.language_exchange_enabled {
        if let Some(locale) = locale {
            request
                .extra_params
                .push((settings.language_parameter_name.clone(), locale.to_string()));
        }
    }

    let url = request.to_url(&endpoints.authorization);
    debug!(client_id = %settings.client_id, "built authorization URL");
    url
}

/// Redirect target and correlation state handed to the host when a user
/// initiates login
#[derive(Debug, Clone)]
pub struct LoginHandoff {
    /// Authorization URL to redirect the user agent to
    pub authorization_url: Url,
    /// State token to correlate with the resulting callback
    pub state: String,
}

/// Login initiation over validated settings with injected collaborators
///
/// The host issues the HTTP redirect to [`LoginHandoff::authorization_url`]
/// and suppresses response caching for that request; both stay outside this
/// core. Concurrent logins for different users are independent.
#[derive(Debug)]
pub struct AuthorizationFlow<S, L> {
    settings: ProviderSettings,
    state_provider: S,
    locales: L,
}

impl<S, L> AuthorizationFlow<S, L>
where
    S: StateTokenProvider,
    L: LocaleResolver,
{
    /// Create a flow over validated settings.
    pub fn new(settings: ProviderSettings, state_provider: S, locales: L) -> Self {
        Self { settings, state_provider, locales }
    }

    /// Begin a login attempt.
    ///
    /// Resolves effective endpoints, draws a fresh state token, looks up the
    /// active locale, and builds the authorization URL.
    ///
    /// # Errors
    /// Returns an error when endpoint resolution or state generation fails.
    pub fn begin(&self, redirect_uri: &Url) -> Result<LoginHandoff> {
        let endpoints = ResolvedEndpoints::resolve(&self.settings)?;
        let state = self.state_provider.state_token()?;
        let locale = self.locales.current_locale();

        let authorization_url = build_authorization_url(
            &self.settings,
            &endpoints,
            redirect_uri,
            &state,
            locale.as_deref(),
        );

        Ok(LoginHandoff { authorization_url, state })
    }

    /// Settings backing this flow.
    #[must_use]
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }
}
