//! Default CSRF state token generation
//!
//! State tokens correlate the authorization request with its callback and
//! guard against login CSRF. Hosts with their own token service implement
//! [`StateTokenProvider`] instead.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;

use crate::error::Result;
use crate::traits::StateTokenProvider;

/// Generate a random state token for CSRF protection
///
/// Returns a URL-safe base64-encoded random string of 32 bytes (43
/// characters), safe to embed in a query parameter without further encoding.
#[must_use]
pub fn generate_state() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    URL_SAFE_NO_PAD.encode(random_bytes)
}

/// Default state provider backed by the thread-local RNG
///
/// Stateless; a single instance may serve concurrent login attempts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStateProvider;

impl StateTokenProvider for RandomStateProvider {
    fn state_token(&self) -> Result<String> {
        Ok(generate_state())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for state token generation.
    use super::*;

    /// Validates `generate_state` behavior for the token shape scenario.
    ///
    /// Assertions:
    /// - Confirms the token length equals `43`.
    /// - Ensures no padding characters are present.
    /// - Ensures URL-safe characters only (no `+` or `/`).
    #[test]
    fn test_state_token_shape() {
        let state = generate_state();

        assert_eq!(state.len(), 43);
        assert!(!state.contains('='));
        assert!(!state.contains('+'));
        assert!(!state.contains('/'));
    }

    /// Validates `generate_state` behavior for the uniqueness scenario.
    ///
    /// Assertions:
    /// - Confirms consecutive tokens differ.
    #[test]
    fn test_state_tokens_unique() {
        let first = generate_state();
        let second = generate_state();

        assert_ne!(first, second);
    }

    /// Validates `RandomStateProvider` behavior through the trait.
    ///
    /// Assertions:
    /// - Ensures the provider yields non-empty tokens.
    #[test]
    fn test_provider_yields_tokens() {
        let provider = RandomStateProvider;
        let state = provider.state_token().expect("state generation should succeed");
        assert!(!state.is_empty());
    }
}
