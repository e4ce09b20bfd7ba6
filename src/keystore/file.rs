//! File-backed credential store.
//!
//! All keys live in one JSON document, mirroring the single fixed record the
//! original dashboard kept in browser storage.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Credentials, KeyStore};
use crate::error::{Error, Result};

/// Fixed file name for the credential record.
pub const DEFAULT_FILE_NAME: &str = "multiapi-keys.json";

/// Credential store persisting to a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under `dir/multiapi-keys.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_FILE_NAME),
        }
    }

    /// Store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyStore for FileStore {
    fn load(&self) -> Result<Credentials> {
        if !self.path.exists() {
            return Ok(Credentials::new());
        }
        let text = fs::read_to_string(&self.path)
            .map_err(|e| Error::Store(format!("read {}: {e}", self.path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Store(format!("parse {}: {e}", self.path.display())))
    }

    fn save(&mut self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("create {}: {e}", parent.display())))?;
        }
        let text = serde_json::to_string_pretty(credentials)
            .map_err(|e| Error::Store(format!("encode credentials: {e}")))?;
        fs::write(&self.path, text)
            .map_err(|e| Error::Store(format!("write {}: {e}", self.path.display())))
    }
}
