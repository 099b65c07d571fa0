//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod storage;

pub use repository::{ContactRepository, PostRepository};
pub use storage::{KeyValueStore, StorageError};
