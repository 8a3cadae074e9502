//! Key-value persistence collaborator. The engine only ever uses two
//! fixed keys: the serialized document snapshot and the selected
//! language code. Storage failures degrade with a warning instead of
//! surfacing; the document model stays authoritative either way.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the serialized document snapshot is persisted.
pub const USER_CONFIG_KEY: &str = "userConfig";
/// Key under which the selected language code is persisted.
pub const LANG_KEY: &str = "lang";

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory storage for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed storage: one file per key under the data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Best effort: a data directory that cannot be created still
    /// yields a working (empty, non-persisting) storage.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!("cannot create data directory {}: {e}", dir.display());
        }
        FileStorage { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.key_path(key), value) {
            log::warn!("failed to persist {key}: {e}");
        }
    }
}
