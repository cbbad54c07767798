//! Axum extractor for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use tm_auth::{ACCESS_TOKEN_COOKIE, AccessClaims};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

/// The verified identity attached to a protected request.
///
/// Extraction rejects with the 401 authentication failure when no
/// `accessToken` cookie is present or its token fails signature/expiry
/// verification; the handler never runs and the store is never touched.
pub struct Identity(pub AccessClaims);

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let jar = CookieJar::from_headers(&parts.headers);

            let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) else {
                log::debug!("Request without access token cookie");
                return Err(ApiError::unauthorized("missing access token cookie"));
            };

            match state.jwt_validator.validate(cookie.value()) {
                Ok(claims) => Ok(Identity(claims)),
                Err(e) => {
                    log::debug!("Access token rejected: {}", e);
                    Err(ApiError::unauthorized(e.to_string()))
                }
            }
        }
    }
}

/// Authorization rule for identity-scoped endpoints: the credential subject
/// must equal the email named in the request path. Distinct from the
/// authentication failure the extractor produces.
pub fn require_identity_match(claims: &AccessClaims, email: &str) -> Result<(), ApiError> {
    if claims.subject_matches(email) {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}
