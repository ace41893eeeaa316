//! Password hashing
//!
//! bcrypt is CPU-bound, so both hashing and verification run on tokio's
//! blocking pool instead of a request worker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a password with a fresh salt
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
