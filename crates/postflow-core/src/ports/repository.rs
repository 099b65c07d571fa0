use async_trait::async_trait;

use crate::domain::{Contact, DraftEdit, NewContact, NewDraft, Post, PostStatus, StatusCounts};
use crate::error::DomainError;

/// Post repository - sole owner of durable post state.
///
/// Every mutation reads the whole collection, changes one post and writes the
/// whole collection back. Transitions return the updated post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Install the seed posts unless the store is already initialized.
    /// Returns `true` when seeding happened.
    async fn ensure_seeded(&self) -> Result<bool, DomainError>;

    /// All posts in storage order.
    async fn get_all(&self) -> Result<Vec<Post>, DomainError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, DomainError>;

    async fn get_by_status(&self, status: PostStatus) -> Result<Vec<Post>, DomainError>;

    async fn get_counts(&self) -> Result<StatusCounts, DomainError>;

    async fn create_draft(&self, draft: NewDraft) -> Result<Post, DomainError>;

    async fn update_draft(&self, id: &str, edit: DraftEdit) -> Result<Post, DomainError>;

    async fn submit_for_approval(&self, id: &str) -> Result<Post, DomainError>;

    async fn approve(&self, id: &str) -> Result<Post, DomainError>;

    async fn reject(&self, id: &str, reason: Option<String>) -> Result<Post, DomainError>;

    /// Remove a post permanently. Fails with `NotFound` for unknown ids.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Drop all posts and the initialized marker, then seed again.
    async fn reset_database(&self) -> Result<(), DomainError>;
}

/// Contact repository with add/delete only.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts, seeding the demo set on first access.
    async fn list(&self) -> Result<Vec<Contact>, DomainError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Contact>, DomainError>;

    async fn add_contact(&self, contact: NewContact) -> Result<Contact, DomainError>;

    /// Fails with `NotFound` for unknown ids.
    async fn delete_contact(&self, id: &str) -> Result<(), DomainError>;
}
