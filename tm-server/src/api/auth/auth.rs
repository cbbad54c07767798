//! Token service handlers
//!
//! Issuance binds whatever identity payload the caller supplies - it is not
//! checked against the user store. Logout only clears the client-held
//! cookie; an already-issued token stays valid until its natural expiry.

use crate::api::auth::token_ack::TokenAck;
use crate::state::{AppState, CookieSettings};
use crate::{ApiError, ApiResult};

use tm_auth::ACCESS_TOKEN_COOKIE;

use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use serde_json::{Map, Value};

fn access_token_cookie(settings: CookieSettings, token: String) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(settings.same_site)
        .build()
}

/// POST /my-task/api/v1/auth/access-token
///
/// Sign the identity payload and set it as the HTTP-only credential cookie.
pub async fn issue_access_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<Map<String, Value>>,
) -> ApiResult<(CookieJar, Json<TokenAck>)> {
    log::info!(
        "Access token requested for {}",
        payload
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or("<no email>")
    );

    let token = state
        .token_issuer
        .issue(payload)
        .map_err(|e| ApiError::storage(e.to_string()))?;

    let jar = jar.add(access_token_cookie(state.cookie_settings, token));

    Ok((jar, Json(TokenAck::ok())))
}

/// GET /my-task/api/v1/logout
///
/// Instruct the client to drop the credential cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<TokenAck>) {
    let jar = jar.remove(access_token_cookie(state.cookie_settings, String::new()));

    (jar, Json(TokenAck::ok()))
}
