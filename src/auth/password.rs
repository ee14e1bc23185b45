//! Argon2id password hashing and verification.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::ArgonConfig;
use crate::error::AppError;

/// Hash a plaintext password with Argon2id.
///
/// A fresh random salt is generated per call, so hashing the same password
/// twice yields two different PHC strings. The salt and cost parameters are
/// embedded in the returned string; nothing else needs to be stored to
/// re-verify.
pub fn hash_password(password: &str, config: &ArgonConfig) -> Result<String, AppError> {
    let params = Params::new(
        config.memory_cost_kib,
        config.time_cost,
        1,
        Some(config.hash_length),
    )
    .map_err(|e| AppError::Internal(format!("Invalid argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
///
/// The comparison is constant-time with respect to the password. A wrong
/// password returns `Ok(false)`; a stored credential that cannot be parsed
/// is an error, never a silent pass.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Corrupt stored credential: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
