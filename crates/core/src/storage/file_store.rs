use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::StorageError;
use crate::constants::FILE_EXTENSION;

/// Byte-level storage addressed by logical file name.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read the whole file. A missing file is [`StorageError::NotFound`].
    async fn load(&self, name: &str) -> Result<Vec<u8>, StorageError>;

    /// Replace the file contents.
    async fn save(&self, name: &str, data: Vec<u8>) -> Result<(), StorageError>;
}

/// Files under a document directory, one `<name>.json` per logical name.
#[derive(Debug, Clone)]
pub struct DocumentFileStore {
    root: PathBuf,
}

impl DocumentFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path backing a logical name.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, FILE_EXTENSION))
    }
}

#[async_trait]
impl FileStore for DocumentFileStore {
    async fn load(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(name);
        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound(path.display().to_string())
            } else {
                StorageError::Io(e)
            }
        })
    }

    async fn save(&self, name: &str, data: Vec<u8>) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path_for(name), data).await?;
        Ok(())
    }
}

/// In-memory store shared between clones.
#[derive(Clone, Default)]
pub struct InMemoryFileStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of a file, if it was ever saved.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.lock().get(name).cloned()
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn load(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn save(&self, name: &str, data: Vec<u8>) -> Result<(), StorageError> {
        self.lock().insert(name.to_string(), data);
        Ok(())
    }
}
