//! Storage primitive implementations - in-memory, file and Redis.

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use postflow_core::ports::{KeyValueStore, StorageError};

pub use file::FileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisStore, RedisStoreConfig};

/// Which storage primitive backs the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(StorageError::Unavailable(format!(
                "unknown storage backend `{other}`"
            ))),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Store file for the `file` backend.
    pub data_file: PathBuf,
    pub redis_url: String,
    pub redis_connect_timeout: Duration,
    pub redis_key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_file: PathBuf::from("postflow-data.json"),
            redis_url: "redis://localhost:6379".to_string(),
            redis_connect_timeout: Duration::from_secs(5),
            redis_key_prefix: String::new(),
        }
    }
}

impl StorageConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StorageError> {
        let defaults = Self::default();

        let backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        Ok(Self {
            backend,
            data_file: lookup("POSTFLOW_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            redis_connect_timeout: lookup("REDIS_CONNECT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.redis_connect_timeout),
            redis_key_prefix: lookup("REDIS_KEY_PREFIX")
                .unwrap_or(defaults.redis_key_prefix),
        })
    }
}

/// Open the configured storage primitive.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage - data is lost on exit");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            tracing::info!(path = %config.data_file.display(), "Using file storage");
            Ok(Arc::new(FileStore::new(&config.data_file)))
        }
        #[cfg(feature = "redis")]
        StorageBackend::Redis => {
            let store = RedisStore::connect(RedisStoreConfig {
                url: config.redis_url.clone(),
                connect_timeout: config.redis_connect_timeout,
                key_prefix: config.redis_key_prefix.clone(),
            })
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "redis"))]
        StorageBackend::Redis => Err(StorageError::Unavailable(
            "redis backend requires the `redis` feature".to_string(),
        )),
    }
}
