//! # Postflow Infrastructure
//!
//! Concrete implementations of the ports defined in `postflow-core`:
//! storage-primitive adapters and the repositories that keep the post and
//! contact collections as JSON blobs in them.
//!
//! ## Feature Flags
//!
//! - `redis` - Redis-backed storage primitive
//! - `full` - All optional backends

pub mod repository;
pub mod storage;

// Re-exports - Repositories
pub use repository::{JsonCollection, KvContactRepository, KvPostRepository};

// Re-exports - Storage
pub use storage::{FileStore, InMemoryStore, StorageBackend, StorageConfig, open_store};

#[cfg(feature = "redis")]
pub use storage::RedisStore;
