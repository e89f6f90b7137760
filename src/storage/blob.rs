//! Named blob storage.
//!
//! Persisted state is a handful of opaque named blobs, the way browser local
//! storage holds it. [`FileBlobStore`] keeps one JSON file per blob,
//! [`MemoryBlobStore`] backs tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read/write access to named blobs.
pub trait BlobStore {
    /// Read a blob; `Ok(None)` when it has never been written.
    fn read(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replace a blob's contents.
    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        (**self).read(name)
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(name, contents)
    }
}

/// Blob store backed by `<name>.json` files in a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened blob store");
        Ok(Self { dir })
    }

    /// Directory holding the blobs.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(name)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.path_for(name)?;
        // Replace atomically through a sibling temp file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory blob store.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated blob.
    pub fn with_blob(name: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        store
    }

    /// Whether a blob has been written.
    pub fn contains(&self, name: &str) -> bool {
        self.blobs.borrow().contains_key(name)
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.borrow().get(name).cloned())
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        self.blobs
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid blob name: {0}")]
    InvalidName(String),
}
