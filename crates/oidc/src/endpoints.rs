//! Effective endpoint resolution for a provider
//!
//! B2C user flows publish an authorization endpoint; the token endpoint sits
//! at the same path with `/authorize` replaced by `/token`. Administrators
//! can override the token endpoint explicitly, and the userinfo endpoint is
//! optional.

use tracing::warn;
use url::Url;

use crate::error::{ProviderError, Result};
use crate::types::ProviderSettings;

const AUTHORIZE_SEGMENT: &str = "/authorize";
const TOKEN_SEGMENT: &str = "/token";

/// Effective endpoints for one authentication attempt
///
/// Recomputed from settings on each use and never persisted, so a settings
/// change is picked up on the next login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoints {
    /// Where the user agent is sent to authenticate
    pub authorization: Url,

    /// Where the host exchanges the authorization code
    pub token: Url,

    /// Where the host fetches claims; `None` means no userinfo call is made
    pub userinfo: Option<Url>,
}

impl ResolvedEndpoints {
    /// Resolve effective endpoints from validated settings.
    ///
    /// The token endpoint uses the override verbatim when one is enabled and
    /// non-empty; otherwise it is derived by replacing the first
    /// case-insensitive `/authorize` in the authorization endpoint with
    /// `/token`. Without that segment the authorization endpoint is reused
    /// unchanged, unless `strict_token_derivation` is set, in which case
    /// resolution fails.
    ///
    /// Settings must have passed [`ProviderSettings::validate`]; field
    /// presence is not re-checked here.
    ///
    /// # Errors
    /// Returns [`ProviderError::EndpointUrl`] for a malformed endpoint and
    /// [`ProviderError::TokenDerivation`] in strict mode when the
    /// `/authorize` segment is absent.
    pub fn resolve(settings: &ProviderSettings) -> Result<Self> {
        let authorization = parse_endpoint(&settings.authorization_endpoint)?;

        let token = if settings.token_endpoint_override_enabled
            && !settings.token_endpoint_override.trim().is_empty()
        {
            parse_endpoint(&settings.token_endpoint_override)?
        } else {
            match derive_token_endpoint(&settings.authorization_endpoint) {
                Some(derived) => parse_endpoint(&derived)?,
                None if settings.strict_token_derivation => {
                    return Err(ProviderError::TokenDerivation(
                        settings.authorization_endpoint.clone(),
                    ));
                }
                None => {
                    warn!(
                        endpoint = %settings.authorization_endpoint,
                        "no /authorize segment; reusing authorization endpoint as token endpoint"
                    );
                    authorization.clone()
                }
            }
        };

        let userinfo = if settings.userinfo_endpoint_enabled
            && !settings.userinfo_endpoint.trim().is_empty()
        {
            Some(parse_endpoint(&settings.userinfo_endpoint)?)
        } else {
            None
        };

        Ok(Self { authorization, token, userinfo })
    }
}

/// Replace the first case-insensitive `/authorize` with `/token`.
///
/// Returns `None` when the segment is absent. ASCII lowercasing keeps byte
/// offsets stable, so the splice indices are valid in the original string.
fn derive_token_endpoint(authorization_endpoint: &str) -> Option<String> {
    let haystack = authorization_endpoint.to_ascii_lowercase();
    let position = haystack.find(AUTHORIZE_SEGMENT)?;

    let mut derived = String::with_capacity(authorization_endpoint.len());
    derived.push_str(&authorization_endpoint[..position]);
    derived.push_str(TOKEN_SEGMENT);
    derived.push_str(&authorization_endpoint[position + AUTHORIZE_SEGMENT.len()..]);
    Some(derived)
}

fn parse_endpoint(value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|source| ProviderError::EndpointUrl { url: value.to_string(), source })
}
