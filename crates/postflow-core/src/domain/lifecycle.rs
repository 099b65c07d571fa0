//! Post lifecycle state machine.
//!
//! The lifecycle is linear: DRAFT → PENDING → APPROVED | REJECTED.
//! Every successful transition appends exactly one audit entry and refreshes
//! `updated_at`. A failed precondition leaves the post untouched.

use chrono::{DateTime, Utc};

use super::post::{AuditAction, AuditEntry, DraftEdit, NewDraft, Post, PostStatus};
use crate::error::DomainError;

/// The status a post must be in for `action` to apply, and the status it moves to.
///
/// Returns `None` for actions that are not status transitions.
pub fn transition_for(action: AuditAction) -> Option<(PostStatus, PostStatus)> {
    match action {
        AuditAction::Submit => Some((PostStatus::Draft, PostStatus::Pending)),
        AuditAction::Approve => Some((PostStatus::Pending, PostStatus::Approved)),
        AuditAction::Reject => Some((PostStatus::Pending, PostStatus::Rejected)),
        AuditAction::Create | AuditAction::Edit => None,
    }
}

/// Statuses reachable in one step from `current`.
pub fn allowed_next_states(current: PostStatus) -> Vec<PostStatus> {
    [
        AuditAction::Submit,
        AuditAction::Approve,
        AuditAction::Reject,
    ]
    .into_iter()
    .filter_map(transition_for)
    .filter(|(from, _)| *from == current)
    .map(|(_, to)| to)
    .collect()
}

impl Post {
    /// Create a new draft with a single CREATE audit entry.
    pub fn draft(id: impl Into<String>, draft: NewDraft, actor: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            caption: draft.caption,
            media_uris: draft.media_uris,
            platforms: draft.platforms,
            scheduled_at: draft.scheduled_at,
            status: PostStatus::Draft,
            rejection_reason: None,
            created_by: actor.to_string(),
            created_at: now,
            updated_at: now,
            audit: vec![AuditEntry::new(now, actor, AuditAction::Create)],
        }
    }

    /// DRAFT → PENDING.
    pub fn submit(&mut self, actor: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.transition(AuditAction::Submit, actor, now, None)
    }

    /// PENDING → APPROVED.
    pub fn approve(&mut self, actor: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.transition(AuditAction::Approve, actor, now, None)
    }

    /// PENDING → REJECTED. The reason, if any, is kept on the post and on the audit entry.
    pub fn reject(
        &mut self,
        reason: Option<String>,
        actor: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.transition(AuditAction::Reject, actor, now, reason.clone())?;
        self.rejection_reason = reason;
        Ok(())
    }

    /// Apply an edit to a draft. Only drafts can be edited.
    pub fn edit(
        &mut self,
        edit: DraftEdit,
        actor: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.require_status(PostStatus::Draft, AuditAction::Edit)?;

        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(caption) = edit.caption {
            self.caption = caption;
        }
        if let Some(media_uris) = edit.media_uris {
            self.media_uris = media_uris;
        }
        if let Some(platforms) = edit.platforms {
            self.platforms = platforms;
        }
        if let Some(scheduled_at) = edit.scheduled_at {
            self.scheduled_at = scheduled_at;
        }

        self.record(AuditAction::Edit, actor, now, None);
        Ok(())
    }

    fn transition(
        &mut self,
        action: AuditAction,
        actor: &str,
        now: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(), DomainError> {
        let Some((from, to)) = transition_for(action) else {
            let msg = format!("{action} is not a status transition");
            return Err(DomainError::Validation(msg));
        };
        self.require_status(from, action)?;

        self.status = to;
        self.record(action, actor, now, note);
        Ok(())
    }

    fn require_status(&self, expected: PostStatus, action: AuditAction) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                action,
            });
        }
        Ok(())
    }

    // Clamped so the trail stays ordered and updated_at >= created_at even if
    // the wall clock steps backwards.
    fn record(
        &mut self,
        action: AuditAction,
        actor: &str,
        now: DateTime<Utc>,
        note: Option<String>,
    ) {
        let floor = self.audit.last().map_or(self.created_at, |entry| entry.at);
        let at = now.max(floor).max(self.created_at);

        let entry = AuditEntry::new(at, actor, action).with_note(note);
        self.audit.push(entry);
        self.updated_at = at;
    }
}
