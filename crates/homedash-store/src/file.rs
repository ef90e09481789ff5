//! Directory-backed store: one `<key>.json` file per key.
//!
//! Keys are percent-encoded into file stems, with `.` escaped too, so any
//! key maps to a single file inside the root and [`Store::keys`] can decode
//! the stems back into the original keys.
//!
//! The directory is created lazily on first write, so pointing a
//! `FileStore` at a fresh path behaves like an empty store.

use std::io;
use std::path::{Path, PathBuf};

use homedash_types::error::{DashError, Result};

use crate::Store;

/// Persistent store rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(DashError::Store("empty key".into()));
        }
        Ok(self.root.join(format!("{}.json", file_stem(key))))
    }
}

/// Map a key onto a file stem that cannot be hidden or leave the root.
fn file_stem(key: &str) -> String {
    urlencoding::encode(key).replace('.', "%2E")
}

/// Inverse of [`file_stem`]; `None` for names this store did not write.
fn key_from_stem(stem: &str) -> Option<String> {
    urlencoding::decode(stem).ok().map(|k| k.into_owned())
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(&path, value).map_err(|e| {
            DashError::Store(format!("writing {}: {e}", path.display()))
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let rd = match std::fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut keys = Vec::new();
        for entry in rd {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).and_then(key_from_stem) {
                Some(key) => keys.push(key),
                None => log::debug!("skipping foreign file {}", path.display()),
            }
        }
        keys.sort();
        Ok(keys)
    }
}
