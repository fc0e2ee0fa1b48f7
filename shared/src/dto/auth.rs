use crate::dto::user::{UserDto, UserRole};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
    static ref HAS_UPPER: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref HAS_LOWER: Regex = Regex::new(r"[a-z]").unwrap();
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom = "validate_password_strength")]
    pub password: String,
    pub role: UserRole,
    #[validate(length(min = 1, message = "Select a course"))]
    pub course: String,
    #[validate(length(min = 1, message = "Select a department"))]
    pub department: String,
}

/// Successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

/// At least six characters with a number, an uppercase and a lowercase letter.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && HAS_DIGIT.is_match(password)
        && HAS_UPPER.is_match(password)
        && HAS_LOWER.is_match(password);
    if strong {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_strength");
        err.message = Some(
            "Password must be at least 6 characters with a number, uppercase and lowercase letter."
                .into(),
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Abc123" ; "minimum")]
    #[test_case("Sup3rSecret" ; "long")]
    fn strong_passwords(password: &str) {
        assert!(validate_password_strength(password).is_ok());
    }

    #[test_case("Ab1" ; "too short")]
    #[test_case("abcdef1" ; "no uppercase")]
    #[test_case("ABCDEF1" ; "no lowercase")]
    #[test_case("Abcdefg" ; "no digit")]
    fn weak_passwords(password: &str) {
        assert!(validate_password_strength(password).is_err());
    }

    #[test]
    fn register_request_reports_each_bad_field() {
        let request = RegisterRequest {
            username: "ab".into(),
            email: "not-an-email".into(),
            password: "weak".into(),
            role: UserRole::Student,
            course: String::new(),
            department: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["username", "email", "password", "course", "department"] {
            assert!(fields.contains_key(field), "expected error on {}", field);
        }
    }
}
