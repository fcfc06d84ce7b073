//! PostgreSQL-backed stores

pub mod settings;
pub mod user;

pub use settings::PgSettings;
pub use user::PgUserStore;
