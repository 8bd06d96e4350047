use camino::Utf8PathBuf;
use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read stored value: {0}")]
    ReadError(io::Error),

    #[error("Failed to write stored value: {0}")]
    WriteError(io::Error),
}

/// String storage under string keys, the shape of a host shell's
/// key-value API.
///
/// Implementations replace the whole value on every write. `get` returns
/// `None` for a key that has never been written.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A [`KeyValueStore`] keeping each key in its own file under one
/// directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: Utf8PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        DirectoryStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Utf8PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::ReadError(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(StoreError::WriteError)?;
        std::fs::write(self.path_for(key), value).map_err(StoreError::WriteError)
    }
}

/// An in-memory [`KeyValueStore`] for tests and hosts without durable
/// storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
