//! Input validation for the login form

use crate::error::AuthError;

/// Validate username
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.trim().is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    Ok(())
}

/// Per-field validation outcome of a submitted form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<AuthError>,
    pub password: Option<AuthError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Check both fields so the form can show every problem at once
pub fn validate_form(username: &str, password: &str) -> FieldErrors {
    FieldErrors {
        username: validate_username(username).err(),
        password: validate_password(password).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(validate_username(" \t\n"), Err(AuthError::EmptyUsername));
        assert_eq!(validate_password("  "), Err(AuthError::EmptyPassword));
        assert_eq!(validate_username(" admin "), Ok(()));
    }

    #[test]
    fn test_validate_form_reports_both_fields() {
        let errors = validate_form("", "");
        assert_eq!(errors.username, Some(AuthError::EmptyUsername));
        assert_eq!(errors.password, Some(AuthError::EmptyPassword));

        let errors = validate_form("admin", " ");
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, Some(AuthError::EmptyPassword));

        assert!(validate_form("admin", "secret").is_empty());
    }
}
