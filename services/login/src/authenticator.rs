//! Credential verification and session establishment
//!
//! One attempt runs validate, query, verify, then writes the session. Every
//! call is independent: there is no attempt counter and nothing is retried.
//! Accounts are matched on username alone, whatever their role.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    error::AuthError,
    models::{Credentials, Session, SessionId},
    store::{SessionStore, UserStore},
};

/// Stateless authenticator over injected user and session stores
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Verify `username`/`password` and write a logged-in session under `sid`
    ///
    /// Empty fields fail before the store is queried. On success the session
    /// store has received exactly one write and the written session is
    /// returned.
    pub async fn authenticate(
        &self,
        sid: &SessionId,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let credentials = Credentials::parse(username, password)?;

        info!("Login attempt for user: {}", credentials.username());

        let mut rows = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(|e| {
                error!("User lookup failed: {}", e);
                AuthError::BackendError
            })?;

        if rows.len() != 1 {
            warn!(
                "Rejected login for {}: {} matching accounts",
                credentials.username(),
                rows.len()
            );
            return Err(AuthError::NoAccountFound);
        }
        let user = rows.remove(0);

        if !verify_password(credentials.password(), &user.password_hash) {
            warn!("Rejected login for {}: invalid password", user.username);
            return Err(AuthError::InvalidPassword);
        }

        let session = Session::for_user(&user);
        self.sessions.set(sid, &session).await.map_err(|e| {
            error!("Failed to store session: {}", e);
            AuthError::BackendError
        })?;

        info!("User {} logged in with role {}", user.username, user.role);
        Ok(session)
    }
}

/// Constant-time check of `password` against a PHC-encoded Argon2 hash
///
/// A stored hash that cannot be parsed never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is unreadable: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Hash `password` with Argon2 default parameters and a random salt
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            AuthError::BackendError
        })
}
