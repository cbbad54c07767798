use crate::{AccessClaims, AuthError, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Map, Value};

/// Signs identity payloads into time-limited access tokens.
///
/// The issuer and validator share one HS256 secret; a process that reaches
/// this point has already validated the secret at startup, so issuance does
/// not fail in practice.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Sign an identity payload, expiring `ttl_days` from now.
    #[track_caller]
    pub fn issue(&self, payload: Map<String, Value>) -> AuthErrorResult<String> {
        let claims = AccessClaims::from_payload(payload, Utc::now(), self.ttl);
        self.issue_claims(&claims)
    }

    /// Sign pre-built claims. Exposed so tests can mint tokens with
    /// back-dated timestamps.
    #[track_caller]
    pub fn issue_claims(&self, claims: &AccessClaims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
