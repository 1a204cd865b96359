//! Stateless bearer tokens: compact HS256 JWTs carrying an open claim map.
//!
//! Nothing is stored server-side. A token is valid exactly while its
//! signature checks out under the configured secret and the current time is
//! not past its `exp` claim.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::state::security_config::SecurityConfig;

/// Token lifetime applied when the caller does not supply `exp`.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Issued-at claim, seconds since epoch.
pub const CLAIM_ISSUED_AT: &str = "iat";
/// Expiry claim, seconds since epoch.
pub const CLAIM_EXPIRY: &str = "exp";

/// Open claim map carried in a token payload.
pub type Claims = Map<String, Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Every verification failure. No reason is reported.
    #[error("invalid token")]
    Invalid,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

fn unix_secs(now: SystemTime) -> Option<i64> {
    now.duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
}

/// Issue a signed token for `claims`.
///
/// The payload starts from `iat = now` and `exp = now + ttl`; caller claims
/// are merged over those defaults, so an explicit `exp` wins.
pub fn issue_token(
    claims: &Claims,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let iat = unix_secs(now)
        .ok_or_else(|| TokenError::Signing("system clock is before the epoch".to_string()))?;
    let ttl = i64::try_from(security.token_ttl_secs).unwrap_or(i64::MAX);

    let mut payload = Claims::new();
    payload.insert(CLAIM_ISSUED_AT.to_string(), Value::from(iat));
    payload.insert(CLAIM_EXPIRY.to_string(), Value::from(iat.saturating_add(ttl)));
    payload.extend(claims.iter().map(|(k, v)| (k.clone(), v.clone())));

    encode(
        &Header::new(security.algorithm),
        &payload,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify `token` and return its claims.
///
/// Any failure (segment count, encoding, header algorithm, signature,
/// non-object payload, non-numeric or elapsed `exp`) yields
/// [`TokenError::Invalid`].
pub fn verify_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    if token.split('.').count() != 3 {
        return Err(TokenError::Invalid);
    }

    // Registered-claim checks are done below against the injected clock.
    let mut validation = Validation::new(security.algorithm);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|_| TokenError::Invalid)?
    .claims;

    if let Some(exp) = claims.get(CLAIM_EXPIRY) {
        let exp = exp.as_f64().ok_or(TokenError::Invalid)?;
        let now = unix_secs(now).ok_or(TokenError::Invalid)?;
        if now as f64 > exp {
            return Err(TokenError::Invalid);
        }
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn secs(t: SystemTime) -> i64 {
        t.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let now = SystemTime::now();
        let token = issue_token(&claims(json!({"username": "alice"})), now, &security()).unwrap();

        let decoded = verify_token(&token, now, &security()).unwrap();
        assert_eq!(decoded["username"], "alice");
        assert_eq!(decoded[CLAIM_ISSUED_AT], secs(now));
        assert_eq!(decoded[CLAIM_EXPIRY], secs(now) + 3600);
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn test_token_shape_is_three_unpadded_urlsafe_segments() {
        let token = issue_token(&Claims::new(), SystemTime::now(), &security()).unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        for segment in segments {
            assert!(!segment.is_empty());
            assert!(!segment.contains(['+', '/', '=']));
        }
    }

    #[test]
    fn test_explicit_exp_overrides_default() {
        let now = SystemTime::now();
        let exp = secs(now) + 10;
        let token = issue_token(&claims(json!({"exp": exp})), now, &security()).unwrap();

        let decoded = verify_token(&token, now, &security()).unwrap();
        assert_eq!(decoded[CLAIM_EXPIRY], exp);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let now = SystemTime::now();
        let exp = secs(now) - 1;
        let token = issue_token(&claims(json!({"exp": exp})), now, &security()).unwrap();

        assert_eq!(verify_token(&token, now, &security()), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let issued = SystemTime::now();
        let token = issue_token(&Claims::new(), issued, &security()).unwrap();

        let at_expiry = issued + Duration::from_secs(DEFAULT_TOKEN_TTL_SECS);
        assert!(verify_token(&token, at_expiry, &security()).is_ok());

        let after_expiry = at_expiry + Duration::from_secs(1);
        assert_eq!(
            verify_token(&token, after_expiry, &security()),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_bad_signature() {
        let token = issue_token(
            &claims(json!({"username": "bob"})),
            SystemTime::now(),
            &SecurityConfig::new("secret-A".as_bytes()),
        )
        .unwrap();

        let result = verify_token(
            &token,
            SystemTime::now(),
            &SecurityConfig::new("secret-B".as_bytes()),
        );
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let now = SystemTime::now();
        for token in ["", "abc", "a.b", "a.b.c", "a.b.c.d", "...", "Bearer x.y.z"] {
            assert_eq!(
                verify_token(token, now, &security()),
                Err(TokenError::Invalid),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_exp_is_invalid() {
        let now = SystemTime::now();
        let token = issue_token(&claims(json!({"exp": "tomorrow"})), now, &security()).unwrap();
        assert_eq!(verify_token(&token, now, &security()), Err(TokenError::Invalid));
    }

    #[test]
    fn test_custom_ttl() {
        let now = SystemTime::now();
        let security = security().with_token_ttl(60);
        let token = issue_token(&Claims::new(), now, &security).unwrap();
        let decoded = verify_token(&token, now, &security).unwrap();
        assert_eq!(decoded[CLAIM_EXPIRY], secs(now) + 60);
    }
}
