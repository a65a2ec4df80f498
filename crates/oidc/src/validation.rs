//! Field-level validation for provider settings
//!
//! Every violation is collected before reporting so an administrator sees all
//! problems in one pass instead of fixing them one save at a time.

use std::fmt;

use crate::types::ProviderSettings;

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Settings field the error refers to
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Validation error carrying all field-level violations of one pass
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    /// Violations in the order the fields were checked
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    #[must_use]
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "validation failed: {}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            write!(f, "validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulating presence checks over settings fields
#[derive(Debug, Default)]
struct Checks {
    errors: ValidationError,
}

impl Checks {
    /// Record an error when the value is empty or whitespace-only.
    fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.add_field_error(field, "cannot be empty");
        }
    }

    fn finalize(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl ProviderSettings {
    /// Check that the minimum required configuration is present.
    ///
    /// All violations are collected and returned together; no check
    /// short-circuits the pass. Conditional fields are checked only when
    /// their enabling flag is set. Pure function over the settings.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] listing every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::default();

        checks.require("client_id", &self.client_id);
        checks.require("client_secret", &self.client_secret);
        checks.require("authorization_endpoint", &self.authorization_endpoint);

        if self.token_endpoint_override_enabled {
            checks.require("token_endpoint_override", &self.token_endpoint_override);
        }
        if self.userinfo_endpoint_enabled {
            checks.require("userinfo_endpoint", &self.userinfo_endpoint);
        }
        if self.language_exchange_enabled {
            checks.require("language_parameter_name", &self.language_parameter_name);
        }

        checks.finalize()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation.
    use super::*;

    fn valid_settings() -> ProviderSettings {
        ProviderSettings::azure_b2c("contoso", "B2C_1_signin", "client-123", "secret-456")
    }

    /// Validates `ProviderSettings::validate` behavior for the complete
    /// settings scenario.
    ///
    /// Assertions:
    /// - Ensures `settings.validate().is_ok()` evaluates to true.
    #[test]
    fn test_valid_settings_pass() {
        let settings = valid_settings();
        assert!(settings.validate().is_ok());
    }

    /// Validates `ProviderSettings::validate` behavior for the all required
    /// fields missing scenario.
    ///
    /// Assertions:
    /// - Confirms the error count equals `3`.
    /// - Ensures each missing field is reported, not just the first.
    #[test]
    fn test_missing_required_fields_accumulate() {
        let mut settings = valid_settings();
        settings.client_id = String::new();
        settings.client_secret = String::new();
        settings.authorization_endpoint = String::new();

        let err = settings.validate().expect_err("empty required fields should fail");
        assert_eq!(err.error_count(), 3);
        assert_eq!(err.field_errors("client_id").len(), 1);
        assert_eq!(err.field_errors("client_secret").len(), 1);
        assert_eq!(err.field_errors("authorization_endpoint").len(), 1);
    }

    /// Validates `ProviderSettings::validate` behavior for the whitespace-only
    /// value scenario.
    ///
    /// Assertions:
    /// - Ensures a whitespace-only `client_id` counts as empty.
    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut settings = valid_settings();
        settings.client_id = "   ".to_string();

        let err = settings.validate().expect_err("whitespace client_id should fail");
        assert_eq!(err.field_errors("client_id").len(), 1);
    }

    /// Validates `ProviderSettings::validate` behavior for the conditional
    /// field scenarios.
    ///
    /// Assertions:
    /// - Ensures an enabled override with an empty value fails.
    /// - Ensures a disabled override with an empty value passes.
    #[test]
    fn test_conditional_fields_checked_only_when_enabled() {
        let mut settings = valid_settings();
        settings.token_endpoint_override_enabled = true;
        settings.token_endpoint_override = String::new();

        let err = settings.validate().expect_err("enabled empty override should fail");
        assert_eq!(err.field_errors("token_endpoint_override").len(), 1);

        settings.token_endpoint_override_enabled = false;
        assert!(settings.validate().is_ok());
    }

    /// Validates `ProviderSettings::validate` behavior for the enabled
    /// userinfo and language fields scenario.
    ///
    /// Assertions:
    /// - Ensures both conditional violations are reported together.
    #[test]
    fn test_userinfo_and_language_conditionals() {
        let mut settings = valid_settings();
        settings.userinfo_endpoint_enabled = true;
        settings.userinfo_endpoint = String::new();
        settings.language_exchange_enabled = true;
        settings.language_parameter_name = String::new();

        let err = settings.validate().expect_err("enabled empty conditionals should fail");
        assert_eq!(err.error_count(), 2);
        assert_eq!(err.field_errors("userinfo_endpoint").len(), 1);
        assert_eq!(err.field_errors("language_parameter_name").len(), 1);
    }

    /// Validates the validation error display scenario.
    ///
    /// Assertions:
    /// - Ensures a single-error display names the field.
    /// - Ensures a multi-error display carries the error count.
    #[test]
    fn test_validation_error_display() {
        let mut single = ValidationError::new();
        single.add_field_error("client_id", "cannot be empty");
        assert_eq!(single.to_string(), "validation failed: client_id: cannot be empty");

        let mut multiple = ValidationError::new();
        multiple.add_field_error("client_id", "cannot be empty");
        multiple.add_field_error("client_secret", "cannot be empty");
        let rendered = multiple.to_string();
        assert!(rendered.contains("2 errors"));
        assert!(rendered.contains("client_secret: cannot be empty"));
    }
}
