use crate::error::AppError;
use bcrypt::{hash, verify};

/// bcrypt work factor for stored digests.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Derives a salted one-way digest. Every call draws a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Returns whether `password` matches `hashed_password`.
///
/// A malformed digest is treated as a mismatch.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    match verify(password, hashed_password) {
        Ok(matches) => matches,
        Err(e) => {
            log::warn!("Stored password digest could not be checked: {}", e);
            false
        }
    }
}
