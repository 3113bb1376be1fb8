//! Password hashing for person records.
//!
//! Passwords are stored as Argon2id PHC strings and never leave the server.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password with a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash
/// - `Err(AppError::InternalErr(PasswordHash))` - The hasher rejected the input
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash {
            reason: e.to_string(),
        })?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored hash.
///
/// Malformed hashes never verify.
#[cfg(test)]
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
