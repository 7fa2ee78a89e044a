//! Registration form validation
//!
//! Local shape checks applied before any network call is made. Each failure
//! names the offending field.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::errors::{AppError, Result};

const MIN_PASSWORD_LEN: usize = 6;

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-zÇçĞğİıÖöŞşÜü\s]{2,50}$").unwrap())
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate a registration form
pub fn validate_registration(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<()> {
    if first_name.trim().is_empty() || !name_re().is_match(first_name) {
        return Err(AppError::InvalidInput(
            "first name must be 2-50 letters".to_string(),
        ));
    }

    if last_name.trim().is_empty() || !name_re().is_match(last_name) {
        return Err(AppError::InvalidInput(
            "last name must be 2-50 letters".to_string(),
        ));
    }

    if email.trim().is_empty() || !email_re().is_match(email) {
        return Err(AppError::InvalidInput(
            "email address is not valid".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_registration("ayse@example.com", "gizli123", "Ayşe", "Yılmaz").is_ok());
    }

    #[test]
    fn test_turkish_letters_are_accepted_in_names() {
        assert!(validate_registration("c@example.com", "gizli123", "Çağla", "Öztürk").is_ok());
        assert!(validate_registration("g@example.com", "gizli123", "Gökçe", "Şahin").is_ok());
    }

    #[test]
    fn test_single_letter_name_fails() {
        let err = validate_registration("a@b.co", "gizli123", "A", "Yılmaz").unwrap_err();
        assert!(err.to_string().contains("first name"));
    }

    #[test]
    fn test_name_with_digits_fails() {
        let err = validate_registration("a@b.co", "gizli123", "Ali3", "Yılmaz").unwrap_err();
        assert!(err.to_string().contains("first name"));
    }

    #[test]
    fn test_malformed_email_fails() {
        for email in ["", "plain", "a@b", "a b@c.com", "a@b c.com"] {
            let result = validate_registration(email, "gizli123", "Ali", "Yılmaz");
            assert!(result.is_err(), "email {email:?} should fail");
        }
    }

    #[test]
    fn test_short_password_fails() {
        let err = validate_registration("a@b.co", "12345", "Ali", "Yılmaz").unwrap_err();
        assert!(err.to_string().contains("password"));
    }
}
