//! Posts facade - the UI's view of the post collection.
//!
//! Holds an in-memory copy of the repository's collection. Commands go to the
//! repository and the cache is patched from what the repository returns, so a
//! mutation never needs a full reload.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::commands::{CommandOutcome, PostCommand};
use crate::domain::{DraftEdit, NewDraft, Post, PostStatus, StatusCounts};
use crate::error::DomainError;
use crate::ports::PostRepository;

pub struct PostsFacade {
    repo: Arc<dyn PostRepository>,
    cache: RwLock<Vec<Post>>,
}

impl PostsFacade {
    /// Seed the repository if needed and load the collection.
    pub async fn init(repo: Arc<dyn PostRepository>) -> Result<Self, DomainError> {
        let seeded = Self::logged("init", repo.ensure_seeded().await)?;
        let posts = Self::logged("init", repo.get_all().await)?;
        tracing::info!(posts = posts.len(), seeded, "Posts facade initialized");

        Ok(Self {
            repo,
            cache: RwLock::new(posts),
        })
    }

    /// Run a command and patch the cache from its outcome.
    pub async fn execute(&self, command: PostCommand) -> Result<CommandOutcome, DomainError> {
        tracing::debug!(command = command.name(), "Executing post command");

        let outcome = match command {
            PostCommand::CreateDraft(draft) => {
                CommandOutcome::Upserted(self.create_draft(draft).await?)
            }
            PostCommand::EditDraft { id, edit } => {
                CommandOutcome::Upserted(self.update_draft(&id, edit).await?)
            }
            PostCommand::Submit { id } => {
                CommandOutcome::Upserted(self.submit_for_approval(&id).await?)
            }
            PostCommand::Approve { id } => CommandOutcome::Upserted(self.approve(&id).await?),
            PostCommand::Reject { id, reason } => {
                CommandOutcome::Upserted(self.reject(&id, reason).await?)
            }
            PostCommand::Delete { id } => {
                self.delete_post(&id).await?;
                CommandOutcome::Removed(id)
            }
            PostCommand::ResetDatabase => {
                self.reset_database().await?;
                CommandOutcome::Reset
            }
        };

        Ok(outcome)
    }

    pub async fn create_draft(&self, draft: NewDraft) -> Result<Post, DomainError> {
        let post = Self::logged("create_draft", self.repo.create_draft(draft).await)?;
        self.upsert(&post).await;
        Ok(post)
    }

    pub async fn update_draft(&self, id: &str, edit: DraftEdit) -> Result<Post, DomainError> {
        let post = Self::logged("update_draft", self.repo.update_draft(id, edit).await)?;
        self.upsert(&post).await;
        Ok(post)
    }

    pub async fn submit_for_approval(&self, id: &str) -> Result<Post, DomainError> {
        let post = Self::logged(
            "submit_for_approval",
            self.repo.submit_for_approval(id).await,
        )?;
        self.upsert(&post).await;
        Ok(post)
    }

    pub async fn approve(&self, id: &str) -> Result<Post, DomainError> {
        let post = Self::logged("approve", self.repo.approve(id).await)?;
        self.upsert(&post).await;
        Ok(post)
    }

    pub async fn reject(&self, id: &str, reason: Option<String>) -> Result<Post, DomainError> {
        let post = Self::logged("reject", self.repo.reject(id, reason).await)?;
        self.upsert(&post).await;
        Ok(post)
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        Self::logged("delete", self.repo.delete(id).await)?;
        self.cache.write().await.retain(|post| post.id != id);
        Ok(())
    }

    pub async fn reset_database(&self) -> Result<(), DomainError> {
        Self::logged("reset_database", self.repo.reset_database().await)?;
        self.refresh().await
    }

    /// Reload the whole collection from the repository.
    pub async fn refresh(&self) -> Result<(), DomainError> {
        let posts = Self::logged("refresh", self.repo.get_all().await)?;
        tracing::debug!(posts = posts.len(), "Posts refreshed");
        *self.cache.write().await = posts;
        Ok(())
    }

    /// Snapshot of the cached collection in storage order.
    pub async fn posts(&self) -> Vec<Post> {
        self.cache.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Post> {
        let cache = self.cache.read().await;
        cache.iter().find(|post| post.id == id).cloned()
    }

    pub async fn get_by_status(&self, status: PostStatus) -> Vec<Post> {
        self.cache
            .read()
            .await
            .iter()
            .filter(|post| post.status == status)
            .cloned()
            .collect()
    }

    pub async fn counts(&self) -> StatusCounts {
        StatusCounts::from_posts(self.cache.read().await.iter())
    }

    async fn upsert(&self, post: &Post) {
        let mut cache = self.cache.write().await;
        match cache.iter_mut().find(|cached| cached.id == post.id) {
            Some(slot) => *slot = post.clone(),
            None => cache.push(post.clone()),
        }
    }

    fn logged<T>(
        operation: &'static str,
        result: Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        result.inspect_err(|err| {
            tracing::warn!(operation, error = %err, "Post operation failed")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CURRENT_USER, seed};
    use crate::ports::StorageError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Vec-backed repository that counts full reloads and can be made to fail.
    #[derive(Default)]
    struct FakeRepo {
        posts: Mutex<Vec<Post>>,
        reloads: AtomicUsize,
        failing: AtomicBool,
    }

    impl FakeRepo {
        fn check(&self) -> Result<(), DomainError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("offline".into()).into());
            }
            Ok(())
        }

        async fn mutate(
            &self,
            id: &str,
            f: impl FnOnce(&mut Post) -> Result<(), DomainError>,
        ) -> Result<Post, DomainError> {
            self.check()?;
            let mut posts = self.posts.lock().await;
            let post = posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| DomainError::post_not_found(id))?;
            f(post)?;
            Ok(post.clone())
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepo {
        async fn ensure_seeded(&self) -> Result<bool, DomainError> {
            let mut posts = self.posts.lock().await;
            if posts.is_empty() {
                *posts = seed::seed_posts(Utc::now());
                return Ok(true);
            }
            Ok(false)
        }

        async fn get_all(&self) -> Result<Vec<Post>, DomainError> {
            self.check()?;
            self.reloads.fetch_add(1, Ordering::SeqCst);
            Ok(self.posts.lock().await.clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
            let posts = self.posts.lock().await;
            Ok(posts.iter().find(|p| p.id == id).cloned())
        }

        async fn get_by_status(&self, status: PostStatus) -> Result<Vec<Post>, DomainError> {
            let posts = self.posts.lock().await;
            Ok(posts
                .iter()
                .filter(|p| p.status == status)
                .cloned()
                .collect())
        }

        async fn get_counts(&self) -> Result<StatusCounts, DomainError> {
            Ok(StatusCounts::from_posts(self.posts.lock().await.iter()))
        }

        async fn create_draft(&self, draft: NewDraft) -> Result<Post, DomainError> {
            self.check()?;
            let mut posts = self.posts.lock().await;
            let post = Post::draft(
                format!("post-{}", posts.len()),
                draft,
                CURRENT_USER,
                Utc::now(),
            );
            posts.push(post.clone());
            Ok(post)
        }

        async fn update_draft(&self, id: &str, edit: DraftEdit) -> Result<Post, DomainError> {
            self.mutate(id, |p| p.edit(edit, CURRENT_USER, Utc::now()))
                .await
        }

        async fn submit_for_approval(&self, id: &str) -> Result<Post, DomainError> {
            self.mutate(id, |p| p.submit(CURRENT_USER, Utc::now()))
                .await
        }

        async fn approve(&self, id: &str) -> Result<Post, DomainError> {
            self.mutate(id, |p| p.approve(CURRENT_USER, Utc::now()))
                .await
        }

        async fn reject(&self, id: &str, reason: Option<String>) -> Result<Post, DomainError> {
            self.mutate(id, |p| p.reject(reason, CURRENT_USER, Utc::now()))
                .await
        }

        async fn delete(&self, id: &str) -> Result<(), DomainError> {
            self.check()?;
            let mut posts = self.posts.lock().await;
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                return Err(DomainError::post_not_found(id));
            }
            Ok(())
        }

        async fn reset_database(&self) -> Result<(), DomainError> {
            self.check()?;
            *self.posts.lock().await = seed::seed_posts(Utc::now());
            Ok(())
        }
    }

    async fn facade() -> (Arc<FakeRepo>, PostsFacade) {
        let repo = Arc::new(FakeRepo::default());
        let facade = PostsFacade::init(repo.clone()).await.unwrap();
        (repo, facade)
    }

    #[tokio::test]
    async fn test_init_seeds_and_loads() {
        let (repo, facade) = facade().await;
        assert_eq!(facade.posts().await.len(), 4);
        assert_eq!(facade.counts().await.get(PostStatus::Draft), 1);
        assert_eq!(repo.reloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_commands_patch_cache_without_reload() {
        let (repo, facade) = facade().await;

        let outcome = facade
            .execute(PostCommand::CreateDraft(NewDraft::new("Hi", "There")))
            .await
            .unwrap();
        let id = outcome.post().unwrap().id.clone();
        facade
            .execute(PostCommand::Submit { id: id.clone() })
            .await
            .unwrap();

        let cached = facade.posts().await;
        assert_eq!(cached.len(), 5);
        assert_eq!(cached[4].id, id);
        assert_eq!(cached[4].status, PostStatus::Pending);
        assert_eq!(repo.reloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let (_repo, facade) = facade().await;
        facade.approve("pending-1").await.unwrap();

        let cached = facade.posts().await;
        assert_eq!(cached[1].id, "pending-1");
        assert_eq!(cached[1].status, PostStatus::Approved);
        assert_eq!(facade.get_by_status(PostStatus::Approved).await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_and_reset() {
        let (_repo, facade) = facade().await;
        let outcome = facade
            .execute(PostCommand::Delete {
                id: "draft-1".into(),
            })
            .await
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Removed("draft-1".into()));
        assert!(facade.get("draft-1").await.is_none());
        assert_eq!(facade.counts().await.get(PostStatus::Draft), 0);

        facade.execute(PostCommand::ResetDatabase).await.unwrap();
        assert_eq!(facade.posts().await.len(), 4);
    }

    #[tokio::test]
    async fn test_failures_propagate_and_leave_cache_untouched() {
        let (repo, facade) = facade().await;
        let before = facade.posts().await;

        let err = facade.approve("draft-1").await.unwrap_err();
        assert!(err.is_invalid_transition());

        let err = facade.submit_for_approval("missing").await.unwrap_err();
        assert!(err.is_not_found());

        repo.failing.store(true, Ordering::SeqCst);
        let err = facade
            .create_draft(NewDraft::new("Offline", "draft"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        assert_eq!(facade.posts().await, before);
    }
}
