//! User model and login credentials

use sqlx::FromRow;

use crate::{
    error::AuthError,
    validation::{validate_password, validate_username},
};

/// Row of the `users` table as seen by the authenticator
///
/// The hash lives in the `password` column.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub role: String,
    pub is_reseller: bool,
}

/// Username/password pair that passed the emptiness checks
///
/// Both fields are stored trimmed. There is no way to build one with an empty
/// field, so holding a `Credentials` means validation already happened.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Trim both fields and reject empty ones, username first
    pub fn parse(username: &str, password: &str) -> Result<Self, AuthError> {
        validate_username(username)?;
        validate_password(password)?;

        Ok(Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
