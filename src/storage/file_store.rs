//! File-backed key-value store
//!
//! Stores each key as a single file under a root directory. Writes go to a
//! temp file first and are renamed into place, so a value is either the old
//! string or the new one, never a torn write.

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix for in-flight writes; such files are never reported as keys
const TMP_SUFFIX: &str = ".tmp";

/// File-per-key store rooted at a directory
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the root directory if needed)
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::info!("File store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys become filenames directly, so path traversal must be
        // impossible and the temp suffix must stay reserved.
        if key.is_empty()
            || key.contains('/')
            || key.contains('\\')
            || key.contains('\0')
            || key.ends_with(TMP_SUFFIX)
        {
            return Err(AppError::Store(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote key: {} ({} bytes)", key, value.len());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed key: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        if !self.root.exists() {
            return Ok(keys);
        }

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.ends_with(TMP_SUFFIX) {
                    keys.push(name.to_string());
                }
            }
        }

        Ok(keys)
    }
}
