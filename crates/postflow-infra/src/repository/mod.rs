//! Repositories that keep whole collections as JSON blobs in a key-value store.

mod collection;
mod contacts;
mod posts;

pub use collection::JsonCollection;
pub use contacts::{CONTACTS_KEY, KvContactRepository};
pub use posts::{INITIALIZED_KEY, KvPostRepository, POSTS_KEY};
