//! Typed view of the claims the HTTP layer relies on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::token::Claims;

/// Claims inserted into request extensions by `JwtExtract` once a bearer
/// token has been verified.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub username: String,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl AuthClaims {
    /// Extract the typed claims; `None` when `username` is absent or not a string.
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        serde_json::from_value(Value::Object(claims.clone())).ok()
    }
}
