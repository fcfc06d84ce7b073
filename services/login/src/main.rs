use anyhow::Result;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod authenticator;
mod config;
mod error;
mod i18n;
mod models;
mod repositories;
mod routes;
mod session;
mod store;
mod validation;

use common::{
    cache::{RedisConfig, RedisPool},
    database::{self, DatabaseConfig},
};

use crate::{
    authenticator::Authenticator,
    config::{LoginConfig, SessionBackend},
    i18n::Catalog,
    repositories::{PgSettings, PgUserStore},
    session::RedisSessionStore,
    store::{MemorySessionStore, SessionStore, SettingsLookup, Translator},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub sessions: Arc<dyn SessionStore>,
    pub translator: Arc<dyn Translator>,
    pub settings: Arc<dyn SettingsLookup>,
    pub config: LoginConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // `login hash-password` reads a password from stdin and prints its hash
    if std::env::args().nth(1).as_deref() == Some("hash-password") {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        let hash = authenticator::hash_password(line.trim())
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        println!("{}", hash);
        return Ok(());
    }

    info!("Starting login service");

    let config = LoginConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let sessions: Arc<dyn SessionStore> = match config.session_backend {
        SessionBackend::Redis => {
            let redis_config = RedisConfig::from_env()?;
            let redis_pool = RedisPool::new(&redis_config).await?;
            let store = RedisSessionStore::new(redis_pool, config.session_ttl_seconds);
            if !store.health_check().await? {
                anyhow::bail!("Redis did not answer PING");
            }
            info!("Redis session store ready");
            Arc::new(store)
        }
        SessionBackend::Memory => {
            info!("Using in-memory session store; sessions are lost on restart");
            Arc::new(MemorySessionStore::new(Duration::from_secs(
                config.session_ttl_seconds,
            )))
        }
    };

    let authenticator = Authenticator::new(Arc::new(PgUserStore::new(pool.clone())), sessions.clone());

    let app_state = AppState {
        authenticator,
        sessions,
        translator: Arc::new(Catalog::english()),
        settings: Arc::new(PgSettings::new(pool)),
        config: config.clone(),
    };

    info!("Login service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Login service listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
