//! Mapping from domain values to UI view types.

use postflow_core::DomainError;
use postflow_core::domain::{Post, PostStatus, StatusCounts};
use postflow_shared::{CountsView, Notice, PostSummary};

pub fn post_summary(post: &Post) -> PostSummary {
    PostSummary {
        id: post.id.clone(),
        title: post.title.clone(),
        status: post.status.to_string(),
        platforms: post.platforms.iter().map(ToString::to_string).collect(),
        media_count: post.media_uris.len(),
        rejection_reason: post.rejection_reason.clone(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

pub fn counts_view(counts: &StatusCounts) -> CountsView {
    CountsView {
        draft: counts.get(PostStatus::Draft),
        pending: counts.get(PostStatus::Pending),
        approved: counts.get(PostStatus::Approved),
        rejected: counts.get(PostStatus::Rejected),
    }
}

/// Toast for a failed operation.
pub fn error_notice(action: &str, err: &DomainError) -> Notice {
    let title = format!("Could not {action}");
    match err {
        DomainError::NotFound { entity_type, .. } => {
            let detail = format!("That {entity_type} no longer exists");
            Notice::error(title).with_detail(detail)
        }
        DomainError::InvalidTransition { from, .. } => {
            let status = from.as_str().to_lowercase();
            let detail = if from.is_terminal() {
                format!("The post is {status} and can no longer change")
            } else {
                format!("The post is {status} and cannot be changed this way")
            };
            Notice::error(title).with_detail(detail)
        }
        DomainError::Validation(msg) => Notice::error(title).with_detail(msg.clone()),
        DomainError::Storage(e) => {
            tracing::error!(error = %e, "Storage failure");
            Notice::error(title)
                .with_detail("Saving failed, please try again")
        }
    }
}
