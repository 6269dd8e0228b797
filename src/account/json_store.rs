//! User store backed by a single JSON file.
//!
//! The whole document is rewritten on every `put`: written to a sibling
//! temporary file first, then renamed over the original, so a crash never
//! leaves a half-written store. Concurrent writers are last-writer-wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::record::UserRecord;
use super::store::UserStore;

/// On-disk layout. Sorted so diffs of the file stay readable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    users: BTreeMap<String, UserRecord>,
}

/// JSON file store with an in-memory cache.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    users: FxHashMap<String, UserRecord>,
}

impl JsonFileStore {
    /// Open a store. A missing file is an empty store; it is created on the
    /// first `put`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let users = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => FxHashMap::default(),
            Ok(text) => {
                let doc: StoreDocument = serde_json::from_str(&text)?;
                doc.users.into_iter().collect()
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };

        info!("Opened user store {} ({} users)", path.display(), users.len());
        Ok(Self { path, users })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let doc = StoreDocument {
            users: self
                .users
                .iter()
                .map(|(name, record)| (name.clone(), record.clone()))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!("Wrote {} users to {}", self.users.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl UserStore for JsonFileStore {
    fn get(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }

    fn put(&mut self, record: UserRecord) -> Result<(), StoreError> {
        let previous = self.users.insert(record.username.clone(), record.clone());
        if let Err(err) = self.flush() {
            // Keep the cache in line with what is on disk.
            match previous {
                Some(old) => self.users.insert(record.username, old),
                None => self.users.remove(&record.username),
            };
            return Err(err);
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("users.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_put_persists_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put(UserRecord::new("ava", "hash-a")).unwrap();
        store.put(UserRecord::new("ben", "hash-b")).unwrap();
        assert!(path.exists());
        assert!(!store.temp_path().exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.usernames(), vec!["ava", "ben"]);
        assert_eq!(reopened.get("ben").unwrap().password_hash, "hash-b");
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "").unwrap();

        assert!(JsonFileStore::open(&path).unwrap().is_empty());
    }
}
