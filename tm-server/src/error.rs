use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tm_config::ConfigError),

    #[error("Invalid CORS origin {origin}: {message}")]
    CorsOrigin { origin: String, message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
