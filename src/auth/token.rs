use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::AppError;

/// Lifetime of an issued token.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's identifier.
    pub id: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Why a token was rejected.
///
/// Callers over HTTP all see the same 401; the kind is kept for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// Not a decodable token, or its claims are unusable.
    Malformed,
    /// Signed with a different secret or algorithm.
    BadSignature,
    /// Past its `exp`.
    Expired,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CredentialError::Malformed => f.write_str("malformed token"),
            CredentialError::BadSignature => f.write_str("bad signature"),
            CredentialError::Expired => f.write_str("token expired"),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for CredentialError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => CredentialError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                CredentialError::BadSignature
            }
            _ => CredentialError::Malformed,
        }
    }
}

/// Signing and verification keys, derived once from the process-wide secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for `user_id` that expires in 30 days.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            id: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Checks signature and expiry and returns the embedded user id.
    pub fn verify(&self, token: &str) -> Result<Uuid, CredentialError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)?.claims;
        Uuid::parse_str(&claims.id).map_err(|_| CredentialError::Malformed)
    }
}
