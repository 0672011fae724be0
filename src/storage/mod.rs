//! Key-value storage abstraction for the intake form record
//!
//! The projection engine never touches this layer; it exists so the wizard's
//! form state survives across sessions behind a get/set-by-key interface with
//! JSON-serialized payloads.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::FormState;

/// Storage key for the persisted intake form
pub const FORM_DATA_KEY: &str = "retirementFormData";

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string key-value store with JSON-serializable payloads
pub trait KeyValueStore {
    /// Fetch the payload stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous payload
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the payload stored under `key`
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Serialize and persist the intake form under the standard key
pub fn save_form<S: KeyValueStore + ?Sized>(
    store: &mut S,
    form: &FormState,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(form)?;
    log::debug!("saving form record ({} bytes)", payload.len());
    store.set(FORM_DATA_KEY, &payload)
}

/// Load the persisted intake form, if one was saved
pub fn load_form<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<FormState>, StorageError> {
    match store.get(FORM_DATA_KEY)? {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}

/// In-memory store for tests and single-session use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store holding all entries in a single JSON object
///
/// Every write rewrites the file; fine for a handful of small records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
