//! Application state - repositories and the posts facade.

use std::sync::Arc;

use postflow_core::ports::{ContactRepository, PostRepository};
use postflow_core::service::PostsFacade;
use postflow_infra::{KvContactRepository, KvPostRepository, open_store};

use crate::config::AppConfig;

/// Shared application state.
pub struct AppState {
    pub posts: PostsFacade,
    pub contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Open storage and build the repositories on top of it.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = open_store(&config.storage).await?;

        let repo = KvPostRepository::new(store.clone());
        let post_repo: Arc<dyn PostRepository> = Arc::new(repo.with_actor(config.actor.clone()));
        if config.reset_on_start {
            post_repo.reset_database().await?;
        }

        let posts = PostsFacade::init(post_repo).await?;
        let contacts: Arc<dyn ContactRepository> = Arc::new(KvContactRepository::new(store));

        tracing::info!("Application state initialized");
        Ok(Self { posts, contacts })
    }
}
