//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing. Only the PHC-format hash is stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use pindrop_core::DomainError;

use crate::error::AppError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Longer inputs are rejected before hashing
pub const MAX_PASSWORD_LEN: usize = 128;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Verify a password and fail with `InvalidCredentials` on mismatch
///
/// # Errors
/// Returns `DomainError::InvalidCredentials` if the password doesn't match
pub fn verify_or_reject(password: &str, hash: &str) -> Result<(), AppError> {
    if verify_password(password, hash)? {
        Ok(())
    } else {
        Err(DomainError::InvalidCredentials.into())
    }
}

/// Validate password strength
///
/// A password needs 8 to 128 characters with at least one uppercase
/// letter, one lowercase letter and one digit.
///
/// # Errors
/// Returns `DomainError::WeakPassword` naming the first unmet rule
pub fn validate_password_strength(password: &str) -> Result<(), DomainError> {
    let weak = |msg: &str| Err(DomainError::WeakPassword(msg.to_string()));
    let len = password.chars().count();

    if len < MIN_PASSWORD_LEN {
        return weak("must be at least 8 characters long");
    }
    if len > MAX_PASSWORD_LEN {
        return weak("must be at most 128 characters long");
    }
    if !password.chars().any(char::is_uppercase) {
        return weak("must contain at least one uppercase letter");
    }
    if !password.chars().any(char::is_lowercase) {
        return weak("must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return weak("must contain at least one digit");
    }

    Ok(())
}
