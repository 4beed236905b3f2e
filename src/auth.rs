//! Password hashing with Argon2id.
//!
//! Stored passwords are PHC-formatted strings carrying algorithm, parameters,
//! and salt; the plaintext never leaves these functions.

use crate::config::CONFIG;
use crate::error::StoreError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::LazyLock;

/// Hash of a throwaway password, verified against when a username lookup
/// misses so that unknown-user and wrong-password take comparable time.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("stockroom-dummy").unwrap_or_else(|_| String::new())
});

fn hasher() -> Result<Argon2<'static>, StoreError> {
    let cfg = &CONFIG.hash;
    let params = Params::new(cfg.m_cost, cfg.t_cost, cfg.p_cost, None)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string. Parameters are
/// taken from the stored hash, so old records survive cost changes.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Burn roughly one verification's worth of work without revealing anything.
pub fn verify_dummy(plain: &str) {
    let _ = verify_password(plain, &DUMMY_HASH);
}
