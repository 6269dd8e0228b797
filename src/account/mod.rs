//! Player accounts: registration, login and persisted statistics.
//!
//! ## Layout
//!
//! - [`UserStore`]: where records live ([`MemoryStore`], [`JsonFileStore`])
//! - [`PasswordVault`]: Argon2id hashing
//! - [`Accounts`]: the service the arcade talks to

mod accounts;
mod config;
mod error;
mod json_store;
mod password;
mod record;
mod store;

pub use accounts::{normalize_username, Accounts, MAX_USERNAME_LEN};
pub use config::AccountSettings;
pub use error::{AuthError, AuthResult, StoreError};
pub use json_store::JsonFileStore;
pub use password::PasswordVault;
pub use record::{MemoryStats, QuizStats, UserRecord, UserStats};
pub use store::{MemoryStore, UserStore};
