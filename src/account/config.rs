//! Account configuration parameters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Account configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// JSON file holding user records. `None` keeps users in memory only.
    pub store_path: Option<PathBuf>,

    /// Argon2 memory cost in KiB (default: 19456).
    pub hash_memory_kib: u32,

    /// Argon2 passes (default: 2).
    pub hash_iterations: u32,

    /// Argon2 lanes (default: 1).
    pub hash_parallelism: u32,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            store_path: None,
            hash_memory_kib: 19 * 1024,
            hash_iterations: 2,
            hash_parallelism: 1,
        }
    }
}

impl AccountSettings {
    /// Persist users to a JSON file.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Cheapest hashing parameters Argon2 accepts. For tests only.
    #[must_use]
    pub fn with_fast_hashing(mut self) -> Self {
        self.hash_memory_kib = 8;
        self.hash_iterations = 1;
        self.hash_parallelism = 1;
        self
    }
}
