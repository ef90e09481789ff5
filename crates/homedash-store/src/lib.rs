//! Persistent key-value store.
//!
//! All dashboard state lives under a handful of string keys holding JSON
//! values. The [`Store`] trait is the raw string layer; [`StoreExt`] adds the
//! typed `read_or` / `write_value` pair every caller actually uses.
//!
//! Reads never fail from the caller's point of view: a missing key or a
//! value that no longer deserializes yields the caller-supplied default.

mod file;
pub mod keys;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use homedash_types::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw string key-value storage.
pub trait Store {
    /// Fetch the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys currently present, sorted.
    fn keys(&self) -> Result<Vec<String>>;

    /// Check whether `key` holds a value.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

/// Typed JSON access on top of any [`Store`].
pub trait StoreExt: Store {
    /// Read and deserialize `key`, falling back to `default` when the key is
    /// absent, unreadable, or holds JSON of the wrong shape.
    fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::debug!("store read of '{key}' failed: {e}; using default");
                return default;
            },
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("stored value for '{key}' is not valid: {e}; using default");
                default
            },
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn write_value<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
