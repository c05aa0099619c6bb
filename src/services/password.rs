//! # Password Hashing
//!
//! Salted Argon2id hashing with the crate's default (fixed) cost parameters.
//! Hashes are stored in PHC string format, so the salt and parameters travel
//! with the hash. Both operations are CPU-bound and run on tokio's blocking pool.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tokio::task;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("hashing task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// Hashes `plain` with a freshly generated salt.
pub async fn hash_password(plain: String) -> Result<String, PasswordError> {
    task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(PasswordError::Hash)
    })
    .await?
}

/// Checks `plain` against a stored PHC hash. A malformed hash never verifies.
pub async fn verify_password(plain: String, hash: String) -> Result<bool, PasswordError> {
    let verified = task::spawn_blocking(move || {
        PasswordHash::new(&hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    })
    .await?;
    Ok(verified)
}
