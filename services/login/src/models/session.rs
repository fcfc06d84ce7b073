//! Authenticated session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::models::UserRecord;

/// Identity of a logged-in client, written to the session store on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    pub id: i64,
    pub username: String,
    pub role: String,
    pub is_reseller: bool,
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    /// Build the logged-in session for a verified user row
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            logged_in: true,
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            is_reseller: user.is_reseller,
            authenticated_at: Utc::now(),
        }
    }
}

/// Opaque key scoping a session to one client, carried in a cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
