use crate::error::{Result as ServerErrorResult, ServerError};

use tm_auth::{JwtValidator, TokenIssuer};
use tm_config::{Config, Environment};

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_extra::extract::cookie::SameSite;
use sqlx::SqlitePool;

/// Attributes stamped onto the access-token cookie.
///
/// The production frontend is served from another origin, so the cookie must
/// travel cross-site there; in development it stays same-site over plain
/// HTTP.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieSettings {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }
}

/// Shared application state handed to every handler.
///
/// The pool is the single long-lived store handle; handlers receive it here
/// instead of reaching for process globals.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub cookie_settings: CookieSettings,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    /// Build state from validated configuration.
    ///
    /// Expects `config.validate()` to have passed; a missing signing secret
    /// is refused there, before any listener is bound.
    pub fn from_config(config: &Config, pool: SqlitePool) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ServerError::Config(tm_config::ConfigError::auth(
                "auth.jwt_secret must be set",
            )))?;

        let allowed_origins = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ServerError::CorsOrigin {
                    origin: origin.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<ServerErrorResult<Vec<_>>>()?;

        Ok(Self {
            pool,
            token_issuer: Arc::new(TokenIssuer::with_hs256(
                secret.as_bytes(),
                config.auth.token_ttl_days,
            )),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            cookie_settings: CookieSettings::for_environment(config.server.environment),
            allowed_origins,
        })
    }
}
