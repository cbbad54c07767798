pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connect;
pub use error::{DbError, Result};
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations, run once at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
