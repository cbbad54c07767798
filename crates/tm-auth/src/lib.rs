pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod token_issuer;

pub use claims::AccessClaims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use token_issuer::TokenIssuer;

/// Name of the HTTP-only cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
