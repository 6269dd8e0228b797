//! Password hashing.
//!
//! Passwords are stored as Argon2id PHC strings with a random 16-byte salt
//! per user. Verification reads the parameters from the stored string, so
//! changing the configured cost never locks anyone out.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use super::config::AccountSettings;
use super::error::{AuthError, AuthResult};

const SALT_LEN: usize = 16;

/// Hashes and verifies passwords.
#[derive(Clone)]
pub struct PasswordVault {
    argon2: Argon2<'static>,
}

impl PasswordVault {
    /// Build a vault with the configured cost.
    pub fn new(settings: &AccountSettings) -> AuthResult<Self> {
        let params = Params::new(
            settings.hash_memory_kib,
            settings.hash_iterations,
            settings.hash_parallelism,
            None,
        )
        .map_err(hashing_error)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh salt.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let salt = SaltString::encode_b64(&salt).map_err(hashing_error)?;

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(hashing_error)?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored hash.
    ///
    /// A wrong password is `Ok(false)`; a malformed hash is an error.
    pub fn verify(&self, password: &str, stored: &str) -> AuthResult<bool> {
        let parsed = PasswordHash::new(stored).map_err(hashing_error)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(hashing_error(err)),
        }
    }
}

fn hashing_error(err: impl std::fmt::Display) -> AuthError {
    AuthError::Hashing(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> PasswordVault {
        PasswordVault::new(&AccountSettings::default().with_fast_hashing()).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let vault = vault();
        let hash = vault.hash("rainbow").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("rainbow"));
        assert!(vault.verify("rainbow", &hash).unwrap());
        assert!(!vault.verify("Rainbow", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let vault = vault();
        assert_ne!(vault.hash("same").unwrap(), vault.hash("same").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let vault = vault();
        assert!(matches!(
            vault.verify("x", "not-a-phc-string"),
            Err(AuthError::Hashing(_))
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut settings = AccountSettings::default();
        settings.hash_iterations = 0;
        assert!(matches!(PasswordVault::new(&settings), Err(AuthError::Hashing(_))));
    }
}
