//! Credential handling: password digests, signed tokens and the request
//! extractor that resolves a bearer token to a stored user.

pub mod extractors;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::models::UserSummary;

// Re-export necessary items
pub use extractors::{resolve_identity, AuthenticatedUser};
pub use password::{hash_password, verify_password};
pub use token::{Claims, CredentialError, TokenKeys};

/// Response body after a successful sign-up or login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    /// The JWT to present as `Authorization: Bearer <token>`.
    pub token: String,
    pub data: UserSummary,
}
