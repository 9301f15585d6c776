use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::errors::{AppError, AppResult};

/// PHC-formatted Argon2id hash, as stored in the `password_hash` column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Compared against when an email has no account, so a miss costs the same
/// as a wrong password.
pub static DUMMY_HASH: Lazy<Option<CredentialHash>> =
    Lazy::new(|| hash_password("timing-equalisation-placeholder").ok());

pub fn hash_password(password: &str) -> AppResult<CredentialHash> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::HashingError(e.to_string()))?;

    Ok(CredentialHash(hash.to_string()))
}

/// `false` for a wrong password and for a stored value that is not a valid
/// PHC string.
pub fn verify_password(hash: &CredentialHash, candidate: &str) -> bool {
    let parsed = match PasswordHash::new(hash.as_str()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}
