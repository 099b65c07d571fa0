//! Redis storage primitive with connection management.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use postflow_core::ports::{KeyValueStore, StorageError};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Prepended to every key, so several devices can share one server.
    pub key_prefix: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key_prefix: String::new(),
        }
    }
}

/// Redis-backed key-value store.
///
/// Uses connection manager for automatic reconnection.
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    pub async fn connect(config: RedisStoreConfig) -> Result<Self, StorageError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StorageError::Unavailable("Connection timed out".to_string()))?
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        tracing::info!(url = %config.url, prefix = %config.key_prefix, "Connected to Redis store");

        Ok(Self {
            conn,
            key_prefix: config.key_prefix,
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(self.key(key))
            .await
            .map_err(|e| {
                tracing::warn!(key = %key, error = %e, "Redis GET failed");
                StorageError::Operation(e.to_string())
            })
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.key(key), value)
            .await
            .map_err(|e| StorageError::Operation(e.to_string()))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.key(key))
            .await
            .map_err(|e| StorageError::Operation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_store() -> Option<RedisStore> {
        let config = RedisStoreConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6389".to_string()),
            connect_timeout: Duration::from_secs(1),
            key_prefix: "postflow-test:".to_string(),
        };

        RedisStore::connect(config).await.ok()
    }

    #[tokio::test]
    async fn test_redis_store_set_get_remove() {
        let store = match get_test_store().await {
            Some(s) => s,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        store.set_item("test_key", "test_value").await.unwrap();
        assert_eq!(
            store.get_item("test_key").await.unwrap(),
            Some("test_value".to_string())
        );

        store.remove_item("test_key").await.unwrap();
        assert_eq!(store.get_item("test_key").await.unwrap(), None);
    }
}
