use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

/// Origin allow-list for the browser frontends. Credentials mode is always
/// on (the access token travels in a cookie), so a wildcard origin is never
/// valid here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors("cors.allowed_origins must not be empty"));
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must be http(s) origins, got {:?}",
                    origin
                )));
            }
        }

        Ok(())
    }
}
