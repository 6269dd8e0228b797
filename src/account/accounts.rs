//! Registration, login and stat recording on top of a [`UserStore`].

use chrono::Utc;
use log::{info, warn};

use super::config::AccountSettings;
use super::error::{AuthError, AuthResult};
use super::password::PasswordVault;
use super::record::UserRecord;
use super::store::UserStore;
use crate::rules::ActivityResult;

/// Longest accepted username, in characters.
pub const MAX_USERNAME_LEN: usize = 32;

/// Account service.
pub struct Accounts<S: UserStore> {
    store: S,
    vault: PasswordVault,
}

impl<S: UserStore> Accounts<S> {
    pub fn new(store: S, settings: &AccountSettings) -> AuthResult<Self> {
        Ok(Self {
            store,
            vault: PasswordVault::new(settings)?,
        })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a user. The username is trimmed before use.
    pub fn register(&mut self, username: &str, password: &str) -> AuthResult<UserRecord> {
        let username = normalize_username(username)?;
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if self.store.contains(&username) {
            return Err(AuthError::UsernameTaken(username));
        }

        let record = UserRecord::new(username, self.vault.hash(password)?);
        self.store.put(record.clone())?;
        info!("Registered user {}", record.username);
        Ok(record)
    }

    /// Check credentials and return the user's record.
    pub fn login(&self, username: &str, password: &str) -> AuthResult<UserRecord> {
        let username = username.trim();
        let Some(record) = self.store.get(username) else {
            warn!("Login rejected for unknown user {username:?}");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.vault.verify(password, &record.password_hash)? {
            warn!("Login rejected for {username:?}: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!("{} logged in", record.username);
        Ok(record)
    }

    /// Fold a result into a user's statistics and persist it.
    pub fn record_result(&mut self, username: &str, result: &ActivityResult) -> AuthResult<UserRecord> {
        let mut record = self
            .store
            .get(username)
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;
        record.record(result, Utc::now());
        self.store.put(record.clone())?;
        Ok(record)
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<UserRecord> {
        self.store.get(username)
    }

    #[must_use]
    pub fn usernames(&self) -> Vec<String> {
        self.store.usernames()
    }
}

/// Trim and validate a username.
pub fn normalize_username(raw: &str) -> AuthResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AuthError::InvalidUsername("username is empty".into()));
    }
    if name.chars().count() > MAX_USERNAME_LEN {
        return Err(AuthError::InvalidUsername(format!(
            "longer than {MAX_USERNAME_LEN} characters"
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(AuthError::InvalidUsername(format!("{bad:?} is not allowed")));
    }
    Ok(name.to_string())
}
