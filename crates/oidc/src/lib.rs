//! Azure AD B2C OpenID Connect authorization core.
//!
//! Validates provider settings, resolves effective OIDC endpoints, and builds
//! the authorization redirect URL for initiating a login against an Azure AD
//! B2C user flow. Everything after the redirect — token exchange, session
//! handling, account provisioning — belongs to the host application.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │ AuthorizationFlow │  Login initiation with injected collaborators
//! └─────────┬─────────┘
//!           │
//!           ├──► ProviderSettings::validate   (field-error accumulation)
//!           ├──► ResolvedEndpoints::resolve   (endpoint derivation)
//!           └──► build_authorization_url      (query construction)
//! ```
//!
//! # Usage Example
//!
//! ```
//! use b2c_oidc::{AuthorizationFlow, NoActiveLocale, ProviderSettings, RandomStateProvider};
//! use url::Url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings =
//!     ProviderSettings::azure_b2c("contoso", "B2C_1_signin", "client-id", "client-secret");
//! settings.validate()?;
//!
//! let flow = AuthorizationFlow::new(settings, RandomStateProvider, NoActiveLocale);
//! let redirect_uri = Url::parse("https://app.example.com/openid-connect/callback")?;
//! let handoff = flow.begin(&redirect_uri)?;
//!
//! // Hand handoff.authorization_url to the host's redirect mechanism and keep
//! // handoff.state for callback correlation.
//! assert!(handoff.authorization_url.as_str().contains("response_type=code"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: provider settings and presets
//! - [`validation`]: field-error accumulation over settings
//! - [`endpoints`]: effective endpoint resolution
//! - [`authorize`]: authorization request and URL construction
//! - [`traits`]: host-supplied collaborators (state tokens, locale lookup)
//! - [`state`]: default CSRF state token generation
//! - [`loader`]: settings loading from environment or file

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod authorize;
pub mod endpoints;
pub mod error;
pub mod loader;
pub mod state;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types and functions
pub use authorize::{
    build_authorization_url, AuthorizationFlow, AuthorizationRequest, LoginHandoff,
};
pub use endpoints::ResolvedEndpoints;
pub use error::{ProviderError, Result};
pub use state::{generate_state, RandomStateProvider};
pub use traits::{LocaleResolver, NoActiveLocale, StateTokenProvider};
pub use types::ProviderSettings;
pub use validation::{FieldError, ValidationError};
