//! File-backed storage primitive.
//!
//! All keys live in one JSON object on disk. Every write replaces the file
//! atomically (temp file, then rename), so a failed write leaves the previous
//! contents in place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use postflow_core::ports::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to a single JSON file.
pub struct FileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(StorageError::Unavailable(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Serialization(format!("invalid store file {}: {e}", self.path.display()))
        })
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", &self.path, e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| io_error("create", &temp_path, e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| io_error("write", &temp_path, e))?;
        file.write_all(b"\n")
            .await
            .map_err(|e| io_error("write", &temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| io_error("sync", &temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, e))?;

        tracing::trace!(path = %self.path.display(), keys = entries.len(), "Store file written");
        Ok(())
    }
}

fn io_error(operation: &str, path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Operation(format!("failed to {operation} {}: {e}", path.display()))
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.io_lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
