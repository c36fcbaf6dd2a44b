//! File-based key/value backend.

use crate::error::Result;
use crate::store::traits::KeyValueStorage;
use std::fs;
use std::path::PathBuf;

/// File backend with atomic writes: one file per storage key.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the journal directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(base_dir.join("journal"))?;
        Ok(Self { base_dir })
    }

    /// Get the path backing a storage key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join("journal").join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp = path.with_extension("tmp");

        // Write to temp file first
        fs::write(&temp, value)?;

        // Atomic rename - prevents corruption if process crashes mid-write
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
