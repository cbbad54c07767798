mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "https://my-task-manager-7c7cb.web.app",
];
const MIN_PORT: u16 = 1024;

#[cfg(test)]
mod tests;
