//! Admin password storage
//!
//! Hashes are PHC strings (`$argon2id$...`) kept in `users.password_hash`.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

/// Hash an admin password with a fresh salt
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Cannot hash admin password: {e}")))
}

/// Check `password` against a stored PHC string
///
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    let phc = PasswordHash::new(stored)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored password hash is corrupt: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &phc)
        .is_ok())
}

/// Spend one verification on a throwaway hash and report failure
///
/// Login calls this when no user has the submitted email, so an unknown
/// address takes as long to reject as a wrong password.
pub fn verify_dummy_password(password: &str) -> bool {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    if let Some(stored) = DUMMY_HASH.get_or_init(|| hash_password("folio-dummy-password").ok()) {
        let _ = verify_password(password, stored);
    }
    false
}
