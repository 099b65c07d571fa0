//! Key-value backed post repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use postflow_core::DomainError;
use postflow_core::domain::{
    CURRENT_USER, DraftEdit, NewDraft, Post, PostStatus, StatusCounts, seed,
};
use postflow_core::ports::{KeyValueStore, PostRepository};

use super::collection::JsonCollection;

/// Key holding the JSON array of posts.
pub const POSTS_KEY: &str = "social_posts_db";

/// Key whose presence marks the collection as seeded.
pub const INITIALIZED_KEY: &str = "social_posts_db_initialized";

/// Post repository over a key-value store.
///
/// Mutations hold `write_lock` for their whole read-modify-write, so two
/// callers in this process never interleave on the collection.
pub struct KvPostRepository {
    store: Arc<dyn KeyValueStore>,
    posts: JsonCollection<Post>,
    actor: String,
    write_lock: Mutex<()>,
}

impl KvPostRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            posts: JsonCollection::new(store.clone(), POSTS_KEY),
            store,
            actor: CURRENT_USER.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Record actions under a different actor.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    async fn seed_if_needed(&self) -> Result<bool, DomainError> {
        if self.store.get_item(INITIALIZED_KEY).await?.is_some() {
            return Ok(false);
        }

        let posts = seed::seed_posts(Utc::now());
        self.posts.save(&posts).await?;
        self.store.set_item(INITIALIZED_KEY, "true").await?;

        tracing::info!(posts = posts.len(), "Seeded post collection");
        Ok(true)
    }

    async fn mutate<F>(
        &self,
        id: &str,
        operation: &'static str,
        apply: F,
    ) -> Result<Post, DomainError>
    where
        F: FnOnce(&mut Post, &str, DateTime<Utc>) -> Result<(), DomainError> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts.load().await?;

        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        if let Err(err) = apply(&mut *post, &self.actor, Utc::now()) {
            tracing::debug!(post_id = %id, operation, error = %err, "Post transition refused");
            return Err(err);
        }
        let updated = post.clone();

        self.posts.save(&posts).await?;
        tracing::info!(post_id = %id, operation, status = %updated.status, "Post updated");
        Ok(updated)
    }
}

#[async_trait]
impl PostRepository for KvPostRepository {
    async fn ensure_seeded(&self) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.seed_if_needed().await
    }

    async fn get_all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.load().await?;
        tracing::debug!(posts = posts.len(), "Loaded posts");
        Ok(posts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.load().await?;
        Ok(posts.into_iter().find(|post| post.id == id))
    }

    async fn get_by_status(&self, status: PostStatus) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.posts.load().await?;
        posts.retain(|post| post.status == status);
        Ok(posts)
    }

    async fn get_counts(&self) -> Result<StatusCounts, DomainError> {
        let posts = self.posts.load().await?;
        Ok(StatusCounts::from_posts(&posts))
    }

    async fn create_draft(&self, draft: NewDraft) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts.load().await?;

        let post = Post::draft(
            format!("post-{}", uuid::Uuid::new_v4()),
            draft,
            &self.actor,
            Utc::now(),
        );
        posts.push(post.clone());
        self.posts.save(&posts).await?;

        tracing::info!(post_id = %post.id, "Draft created");
        Ok(post)
    }

    async fn update_draft(&self, id: &str, edit: DraftEdit) -> Result<Post, DomainError> {
        self.mutate(id, "update_draft", |post, actor, now| {
            post.edit(edit, actor, now)
        })
        .await
    }

    async fn submit_for_approval(&self, id: &str) -> Result<Post, DomainError> {
        self.mutate(id, "submit_for_approval", |post, actor, now| {
            post.submit(actor, now)
        })
        .await
    }

    async fn approve(&self, id: &str) -> Result<Post, DomainError> {
        self.mutate(id, "approve", |post, actor, now| post.approve(actor, now))
            .await
    }

    async fn reject(&self, id: &str, reason: Option<String>) -> Result<Post, DomainError> {
        self.mutate(id, "reject", |post, actor, now| {
            post.reject(reason, actor, now)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts.load().await?;

        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(DomainError::post_not_found(id));
        }

        self.posts.save(&posts).await?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn reset_database(&self) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        // Marker first: if clearing fails afterwards, the next
        // `ensure_seeded` reseeds instead of finding an empty collection.
        self.store.remove_item(INITIALIZED_KEY).await?;
        self.posts.clear().await?;

        tracing::warn!("Post collection reset");
        self.seed_if_needed().await?;
        Ok(())
    }
}
