use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Access-token claims.
///
/// The identity payload bound at issuance is caller-supplied and opaque to
/// the server; it is NOT checked against the user store. `email`, when the
/// payload carries one, is the subject compared against identity-scoped
/// request paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject email, if the identity payload named one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Remaining caller-supplied identity fields, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccessClaims {
    /// Bind a caller payload into claims issued at `issued_at`, expiring
    /// after `ttl`. The timestamp claims are owned by the issuer, so any
    /// `exp`/`iat` members in the payload are discarded.
    pub fn from_payload(
        mut payload: Map<String, Value>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let email = match payload.remove("email") {
            Some(Value::String(email)) => Some(email),
            // A non-string email stays an opaque payload field and never
            // matches a path identity.
            Some(other) => {
                payload.insert(String::from("email"), other);
                None
            }
            None => None,
        };
        payload.remove("exp");
        payload.remove("iat");

        Self {
            email,
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
            extra: payload,
        }
    }

    /// Identity match for identity-scoped endpoints.
    pub fn subject_matches(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}
