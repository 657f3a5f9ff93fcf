//! Key-value persistence for user events.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{CalError, CalResult};

/// Synchronous key-value storage.
///
/// Values are whole serialized documents; there is no partial update.
pub trait KeyValueStore {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> CalResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> CalResult<()>;
}

/// In-memory storage, mostly for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    pub fn failing() -> Self {
        MemoryStore {
            values: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CalResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        if self.fail_writes {
            return Err(CalError::Storage(format!("write to '{key}' refused")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CalResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| {
            CalError::Storage(format!("Could not write {}: {e}", path.display()))
        })
    }
}
