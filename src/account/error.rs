use thiserror::Error;

/// Errors from a user store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("User store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from registration, login and stat recording.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("Unknown username or wrong password")]
    InvalidCredentials,
    #[error("No user named {0:?}")]
    UnknownUser(String),
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
