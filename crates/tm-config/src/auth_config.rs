use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared by token issuance and verification.
    /// Has no default: the process refuses to start without one.
    pub jwt_secret: Option<String>,
    /// Access-token lifetime in days
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            Some(ref secret) if !secret.is_empty() => {}
            _ => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret must be set (TM_AUTH_JWT_SECRET)",
                ));
            }
        }

        if self.token_ttl_days < 1 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be >= 1, got {}",
                self.token_ttl_days
            )));
        }

        Ok(())
    }
}
