//! Argon2id password hashes, stored as PHC strings in `users.password_hash`.

use argon2::password_hash::{self, rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::{Error, Result};

fn hash_error(context: &str, err: password_hash::Error) -> Error {
    Error::PasswordHash(format!("{context}: {err}"))
}

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| hash_error("hashing failed", e))
}

/// `Ok(false)` on a wrong password; `Err` when `stored` is not a usable hash.
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| hash_error("malformed hash", e))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(hash_error("verification failed", e)),
    }
}
