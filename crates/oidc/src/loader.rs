//! Provider settings loading
//!
//! Loads provider settings from environment variables or a file. Loading
//! never validates: hosts call [`ProviderSettings::validate`] on the result
//! so every field error surfaces together.
//!
//! ## Environment Variables
//! - `B2C_CLIENT_ID`: OAuth client ID (required)
//! - `B2C_CLIENT_SECRET`: OAuth client secret (required)
//! - `B2C_AUTHORIZATION_ENDPOINT`: authorization endpoint URL (required)
//! - `B2C_TOKEN_ENDPOINT_OVERRIDE`: explicit token endpoint; presence enables
//!   the override
//! - `B2C_USERINFO_ENDPOINT`: userinfo endpoint; presence enables the
//!   userinfo call
//! - `B2C_LANGUAGE_PARAMETER`: locale query parameter name; presence enables
//!   language exchange
//! - `B2C_SCOPES`: space-separated scope list
//! - `B2C_STRICT_TOKEN_DERIVATION`: fail instead of falling back when the
//!   token endpoint cannot be derived (true/false)
//!
//! ## File Formats
//! TOML and JSON, detected by file extension.

use std::path::Path;

use crate::error::{ProviderError, Result};
use crate::types::{default_language_parameter, default_scopes, ProviderSettings};

/// Load provider settings from environment variables.
///
/// Required variables must all be present. Optional endpoint variables imply
/// their enabling flag: setting `B2C_USERINFO_ENDPOINT` turns the userinfo
/// call on.
///
/// # Errors
/// Returns `ProviderError::Config` if a required variable is missing.
pub fn load_from_env() -> Result<ProviderSettings> {
    let client_id = env_var("B2C_CLIENT_ID")?;
    let client_secret = env_var("B2C_CLIENT_SECRET")?;
    let authorization_endpoint = env_var("B2C_AUTHORIZATION_ENDPOINT")?;

    let token_endpoint_override = std::env::var("B2C_TOKEN_ENDPOINT_OVERRIDE").ok();
    let userinfo_endpoint = std::env::var("B2C_USERINFO_ENDPOINT").ok();
    let language_parameter = std::env::var("B2C_LANGUAGE_PARAMETER").ok();
    let scopes = std::env::var("B2C_SCOPES")
        .ok()
        .map(|value| value.split_whitespace().map(str::to_string).collect::<Vec<_>>());

    tracing::info!("provider settings loaded from environment variables");

    Ok(ProviderSettings {
        client_id,
        client_secret,
        authorization_endpoint,
        token_endpoint_override_enabled: token_endpoint_override.is_some(),
        token_endpoint_override: token_endpoint_override.unwrap_or_default(),
        userinfo_endpoint_enabled: userinfo_endpoint.is_some(),
        userinfo_endpoint: userinfo_endpoint.unwrap_or_default(),
        language_exchange_enabled: language_parameter.is_some(),
        language_parameter_name: language_parameter.unwrap_or_else(default_language_parameter),
        scopes: scopes.unwrap_or_else(default_scopes),
        strict_token_derivation: env_bool("B2C_STRICT_TOKEN_DERIVATION", false),
    })
}

/// Load provider settings from a file.
///
/// Format is detected by extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `ProviderError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<ProviderSettings> {
    if !path.exists() {
        return Err(ProviderError::Config(format!(
            "settings file not found: {}",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), "loading provider settings from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ProviderError::Config(format!("failed to read settings file: {e}")))?;

    parse_settings(&contents, path)
}

/// Parse provider settings from string content.
///
/// `path` is used for format detection and error messages; hosts that store
/// settings as a blob can pass a synthetic path with the right extension.
///
/// # Errors
/// Returns `ProviderError::Config` if the format is unsupported or parsing
/// fails.
pub fn parse_settings(contents: &str, path: &Path) -> Result<ProviderSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProviderError::Config(format!("invalid TOML settings: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProviderError::Config(format!("invalid JSON settings: {e}"))),
        other => Err(ProviderError::Config(format!("unsupported settings format: {other}"))),
    }
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ProviderError::Config(format!("missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
