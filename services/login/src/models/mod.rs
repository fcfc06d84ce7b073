//! Login service models

pub mod session;
pub mod user;

// Re-export for convenience
pub use session::{Session, SessionId};
pub use user::{Credentials, UserRecord};
