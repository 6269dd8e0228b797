//! User storage.
//!
//! The account layer only talks to [`UserStore`], so the in-memory store
//! used by tests and the JSON file store are interchangeable.

use rustc_hash::FxHashMap;

use super::error::StoreError;
use super::record::UserRecord;

/// Keyed storage for user records.
///
/// ## Implementation Notes
///
/// - `put`: Inserts or replaces the record under `record.username`
/// - `usernames`: Sorted, so listings are stable
pub trait UserStore {
    fn get(&self, username: &str) -> Option<UserRecord>;

    fn put(&mut self, record: UserRecord) -> Result<(), StoreError>;

    fn usernames(&self) -> Vec<String>;

    fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    fn len(&self) -> usize {
        self.usernames().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records kept in memory for the life of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: FxHashMap<String, UserRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }

    fn put(&mut self, record: UserRecord) -> Result<(), StoreError> {
        self.users.insert(record.username.clone(), record);
        Ok(())
    }

    fn usernames(&self) -> Vec<String> {
        let mut names: Vec<_> = self.users.keys().cloned().collect();
        names.sort();
        names
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
