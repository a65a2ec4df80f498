//! Error types used throughout the crate

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for provider configuration and login initiation
#[derive(Error, Debug)]
pub enum ProviderError {
    /// One or more settings fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Settings could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A configured endpoint is not a valid URL.
    #[error("invalid endpoint URL `{url}`: {source}")]
    EndpointUrl {
        /// The offending endpoint value as configured.
        url: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },

    /// The token endpoint could not be derived from the authorization
    /// endpoint and strict derivation is enabled.
    #[error("cannot derive token endpoint: `{0}` has no `/authorize` segment")]
    TokenDerivation(String),

    /// The host's state-token provider failed.
    #[error("state token generation failed: {0}")]
    State(String),
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
