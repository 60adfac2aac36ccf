//! Client-side credential validation.
//!
//! Validation runs in collect-all mode: every violation is gathered before
//! returning, so the form can annotate all offending fields at once instead
//! of stopping at the first failure.

use std::fmt;

use super::Credentials;

/// Form field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Returns the user-facing label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "E-mail",
            Field::Password => "Password",
        }
    }
}

/// A single validation violation, addressed to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All violations from one validation pass, in field order.
///
/// Guaranteed non-empty when returned as the `Err` of
/// [`validate_credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the collected field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the first error message for a given field, if any.
    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field.label(), error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates sign-in credentials, collecting every violation.
///
/// Rules:
/// - email must be non-empty and shaped like an address
/// - password must be non-empty
///
/// # Errors
/// Returns all violations found; never stops at the first one.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if credentials.email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            message: "E-mail is required".to_string(),
        });
    } else if !is_plausible_email(&credentials.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Enter a valid e-mail".to_string(),
        });
    }

    if credentials.password.is_empty() {
        errors.push(FieldError {
            field: Field::Password,
            message: "Password is required".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

/// Structural e-mail check: one `@`, non-empty local part, dotted domain
/// with non-empty labels, no whitespace or control characters.
///
/// Deliberately not a full RFC 5322 grammar; the server has the final say.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Both fields empty: both violations are collected, not just the first.
    #[test]
    fn test_empty_credentials_collects_both_errors() {
        let err = validate_credentials(&credentials("", "")).unwrap_err();

        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.for_field(Field::Email), Some("E-mail is required"));
        assert_eq!(err.for_field(Field::Password), Some("Password is required"));
    }

    /// Malformed e-mail with a valid password: only the email field errors.
    #[test]
    fn test_invalid_email_only_flags_email() {
        let err = validate_credentials(&credentials("not-an-email", "hunter2")).unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].field, Field::Email);
        assert_eq!(err.for_field(Field::Password), None);
    }

    /// Empty e-mail reports "required", not "invalid".
    #[test]
    fn test_empty_email_reports_required() {
        let err = validate_credentials(&credentials("", "hunter2")).unwrap_err();
        assert_eq!(err.for_field(Field::Email), Some("E-mail is required"));
    }

    /// Well-formed credentials pass.
    #[test]
    fn test_valid_credentials_pass() {
        assert!(validate_credentials(&credentials("ana@example.com", "hunter2")).is_ok());
    }

    /// E-mail shape edge cases.
    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("first.last@sub.example.co"));
        assert!(!is_plausible_email("user"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("user@example"));
        assert!(!is_plausible_email("user@example..com"));
        assert!(!is_plausible_email("user@@example.com"));
        assert!(!is_plausible_email("us er@example.com"));
    }

    /// Errors are ordered email first, password second.
    #[test]
    fn test_error_order_is_stable() {
        let err = validate_credentials(&credentials("bad", "")).unwrap_err();
        assert_eq!(err.errors()[0].field, Field::Email);
        assert_eq!(err.errors()[1].field, Field::Password);
    }

    /// Display renders every violation.
    #[test]
    fn test_display_lists_all_violations() {
        let err = validate_credentials(&credentials("", "")).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("E-mail is required"));
        assert!(rendered.contains("Password is required"));
    }
}
