// src/backend/utils/jwt.rs
use crate::error::ServiceError;
use crate::models::common::UserId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Session tokens expire 24 hours after issue.
const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// The account id is the only claim a session token carries, plus the
/// expiry the token format requires.
#[derive(Serialize, Deserialize, Debug)]
struct SessionClaims {
    id: String,
    exp: u64,
}

/// Signs a session token for the given account.
pub fn issue_session_token(user_id: UserId, secret: &str) -> Result<String, ServiceError> {
    let issued_at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| ServiceError::InternalError(format!("clock before epoch: {e}")))?;
    let claims = SessionClaims {
        id: user_id.to_string(),
        exp: (issued_at + SESSION_TTL).as_secs(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServiceError::InternalError(format!("token signing failed: {e}")))
}

/// Checks signature and expiry, returning the account id the token asserts.
pub fn verify_session_token(token: &str, secret: &str) -> Result<UserId, ServiceError> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ServiceError::InvalidToken(e.to_string()))?;
    Uuid::parse_str(&data.claims.id)
        .map_err(|_| ServiceError::InvalidToken("malformed id claim".to_string()))
}
