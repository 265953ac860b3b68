//! Key-value persistence behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors identity into browser `localStorage`. The
//! `KeyValueStore` trait keeps that mirror swappable so the same store logic
//! runs natively in tests against `MemoryStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `StorageError` instead of swallowing failures; the
//! session store decides which failures are fatal to a mutation.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write for key {key}")]
    WriteRejected { key: String },
    #[error("storage read failed for key {key}")]
    ReadFailed { key: String },
}

/// Origin-scoped string key-value storage.
pub trait KeyValueStore {
    /// Read `key`. Absent keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write (quota, privacy mode).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage used by tests and non-browser builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage` for the current origin.
///
/// Holds `None` when the window has no storage (sandboxed iframes, some
/// privacy modes); every operation then reports `StorageError::Unavailable`.
#[cfg(feature = "csr")]
pub struct WebStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl WebStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed { key: key.to_owned() })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
    }
}

/// Storage backing the live session: `localStorage` in the browser build,
/// memory elsewhere.
#[cfg(feature = "csr")]
pub type DefaultStorage = WebStorage;
#[cfg(not(feature = "csr"))]
pub type DefaultStorage = MemoryStorage;

/// Construct the storage backing for the running build.
pub fn default_storage() -> DefaultStorage {
    #[cfg(feature = "csr")]
    {
        WebStorage::local()
    }
    #[cfg(not(feature = "csr"))]
    {
        MemoryStorage::new()
    }
}
