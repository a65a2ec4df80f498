//! Traits for host-supplied collaborators
//!
//! The surrounding application owns CSRF state generation and locale lookup;
//! these traits keep URL construction testable without reaching into the
//! host's framework services.

use crate::error::Result;

/// Source of single-use CSRF state tokens
///
/// Implementations must be safe to share across concurrent login attempts
/// and must never repeat a value within its validity window.
pub trait StateTokenProvider: Send + Sync {
    /// Produce a fresh state token for one authorization request.
    ///
    /// # Errors
    /// Returns an error when the underlying randomness source fails.
    fn state_token(&self) -> Result<String>;
}

/// Lookup of the locale active for the current request
pub trait LocaleResolver: Send + Sync {
    /// Identifier of the active locale, or `None` when the host has no
    /// locale to forward. Without one the language parameter is omitted.
    fn current_locale(&self) -> Option<String>;
}

/// Locale resolver for hosts without multilingual support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActiveLocale;

impl LocaleResolver for NoActiveLocale {
    fn current_locale(&self) -> Option<String> {
        None
    }
}
