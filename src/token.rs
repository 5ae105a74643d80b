//! Stateless bearer tokens: HS256-signed claims {sub, role, exp}.

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::user::Role;

pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

pub fn issue(keys: &Keys, user_id: &str, role: Role) -> Result<String, AppError> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_owned(),
        role,
        exp,
    };
    Ok(encode(&Header::default(), &claims, &keys.encoding)?)
}

/// Expiry, bad signature and malformed input all collapse to 401;
/// the caller never learns which check failed.
pub fn verify(keys: &Keys, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(token, &keys.decoding, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::Unauthenticated("Token has expired"),
            _ => AppError::Unauthenticated("Could not validate credentials"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Keys {
        Keys::new(b"unit-test-secret")
    }

    #[test]
    fn issue_then_verify_preserves_subject_and_role() {
        let keys = keys();
        let token = issue(&keys, "user-123", Role::Teacher).unwrap();
        let claims = verify(&keys, &token).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.role, Role::Teacher);
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = keys();
        let claims = Claims {
            sub: "user-123".into(),
            role: Role::Student,
            // Past the default validation leeway.
            exp: (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        match verify(&keys, &token) {
            Err(AppError::Unauthenticated(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("expected Unauthenticated, got {other:?}"),
        }
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue(&Keys::new(b"other-secret"), "user-123", Role::Student).unwrap();
        assert!(matches!(
            verify(&keys(), &token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify(&keys(), "not.a.jwt"),
            Err(AppError::Unauthenticated(_))
        ));
    }
}
