use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::post::{Post, PostStatus};

/// Number of posts per status. Every status is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<PostStatus, usize>);

impl StatusCounts {
    pub fn from_posts<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Self {
        let mut counts = Self::default();
        for post in posts {
            *counts.0.entry(post.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn get(&self, status: PostStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PostStatus, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self(BTreeMap::from(PostStatus::ALL.map(|status| (status, 0))))
    }
}
