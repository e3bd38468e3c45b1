//! Common validation utilities.

use validator::ValidationError;

/// Rejects values that are empty or only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a password before it is hashed.
///
/// Any non-blank password is accepted. Surrounding whitespace is kept and
/// becomes part of the hashed value.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        let mut err = ValidationError::new("password_blank");
        err.message = Some("Password must not be blank".into());
        return Err(err);
    }

    Ok(())
}

/// Normalizes an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("alice").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn test_validate_not_blank_error_message() {
        let err = validate_not_blank("").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.unwrap().to_string(), "Value must not be blank");
    }

    #[test]
    fn test_validate_password_accepts_short_and_unicode() {
        assert!(validate_password("abc").is_ok());
        assert!(validate_password("ñ").is_ok());
        assert!(validate_password(" padded ").is_ok());
    }

    #[test]
    fn test_validate_password_blank() {
        let err = validate_password("").unwrap_err();
        assert_eq!(err.code, "password_blank");
        let err = validate_password("          ").unwrap_err();
        assert_eq!(err.code, "password_blank");
        assert_eq!(err.message.unwrap().to_string(), "Password must not be blank");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
    }
}
