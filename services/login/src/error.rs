//! Error taxonomy for login attempts

use thiserror::Error;

/// Why an authentication attempt was rejected
///
/// None of the variants carry backend detail. Query and cache failures are
/// logged where they happen and collapse into [`AuthError::BackendError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("username is empty")]
    EmptyUsername,

    #[error("password is empty")]
    EmptyPassword,

    /// Zero rows or more than one row matched the username
    #[error("no account found")]
    NoAccountFound,

    #[error("invalid password")]
    InvalidPassword,

    #[error("backend error")]
    BackendError,
}

/// Form field an error is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl AuthError {
    /// Translation key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::EmptyUsername => "please_enter_username",
            AuthError::EmptyPassword => "please_enter_your_password",
            AuthError::NoAccountFound => "no_admin_account_found",
            AuthError::InvalidPassword => "invalid_password",
            AuthError::BackendError => "oops_something_went_wrong",
        }
    }

    /// Field the message is shown under, `None` for form-level failures
    pub fn field(&self) -> Option<Field> {
        match self {
            AuthError::EmptyUsername | AuthError::NoAccountFound => Some(Field::Username),
            AuthError::EmptyPassword | AuthError::InvalidPassword => Some(Field::Password),
            AuthError::BackendError => None,
        }
    }
}
