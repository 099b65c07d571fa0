use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use postflow_core::ports::{KeyValueStore, StorageError};

/// A `Vec<T>` stored as one JSON array under a single key.
pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _item: PhantomData,
        }
    }

    /// The stored collection, or `None` if the key has never been written.
    pub async fn load_existing(&self) -> Result<Option<Vec<T>>, StorageError> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            StorageError::Serialization(format!("collection `{}` is malformed: {e}", self.key))
        })
    }

    /// The stored collection; an absent key reads as empty.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.load_existing().await?.unwrap_or_default())
    }

    pub async fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set_item(&self.key, &raw).await
    }

    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(&self.key).await
    }
}
