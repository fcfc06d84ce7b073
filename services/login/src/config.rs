//! Service configuration loaded from `LOGIN_*` environment variables

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Where sessions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Redis,
    /// Process-local map, lost on restart
    Memory,
}

/// Login service configuration
///
/// # Environment Variables
/// - `LOGIN_BIND_ADDRESS`: listen address (default: "0.0.0.0:3000")
/// - `LOGIN_SESSION_TTL_SECONDS`: session lifetime in Redis (default: 86400)
/// - `LOGIN_COOKIE_NAME`: session cookie name (default: "login_session")
/// - `LOGIN_LANDING_PATH`: redirect target after login (default: "/index")
/// - `LOGIN_SESSION_BACKEND`: `redis` or `memory` (default: "redis")
#[derive(Debug, Clone, Deserialize)]
pub struct LoginConfig {
    pub bind_address: String,
    pub session_ttl_seconds: u64,
    pub cookie_name: String,
    pub landing_path: String,
    pub session_backend: SessionBackend,
}

impl LoginConfig {
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("session_ttl_seconds", 86400)?
            .set_default("cookie_name", "login_session")?
            .set_default("landing_path", "/index")?
            .set_default("session_backend", "redis")?
            .add_source(Environment::with_prefix("LOGIN").try_parsing(true))
            .build()?;

        let config: LoginConfig = config.try_deserialize()?;

        if config.session_ttl_seconds == 0 {
            anyhow::bail!("LOGIN_SESSION_TTL_SECONDS must be greater than zero");
        }

        Ok(config)
    }
}
