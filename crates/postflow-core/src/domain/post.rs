use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Actor recorded for every action taken on this device.
pub const CURRENT_USER: &str = "current-user";

/// Actor recorded on seeded review decisions.
pub const APPROVER_USER: &str = "approver-user";

/// Where a post sits in the approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl PostStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Draft,
        PostStatus::Pending,
        PostStatus::Approved,
        PostStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Pending => "PENDING",
            PostStatus::Approved => "APPROVED",
            PostStatus::Rejected => "REJECTED",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PostStatus::Approved | PostStatus::Rejected)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::Validation(format!("unknown post status `{s}`")))
    }
}

/// Target social platform tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Tiktok,
    X,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Tiktok,
        Platform::X,
        Platform::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::X => "x",
            Platform::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown platform `{s}`")))
    }
}

/// Kind of change recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Submit,
    Approve,
    Reject,
    Edit,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Submit => "SUBMIT",
            AuditAction::Approve => "APPROVE",
            AuditAction::Reject => "REJECT",
            AuditAction::Edit => "EDIT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable line of a post's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub actor: String,
    pub action: AuditAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AuditEntry {
    pub fn new(at: DateTime<Utc>, actor: impl Into<String>, action: AuditAction) -> Self {
        Self {
            at,
            actor: actor.into(),
            action,
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}

/// Post entity - a social-media post moving through review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub caption: String,
    #[serde(default)]
    pub media_uris: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub audit: Vec<AuditEntry>,
}

/// Input for creating a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDraft {
    pub title: String,
    pub caption: String,
    pub media_uris: Vec<String>,
    pub platforms: Vec<Platform>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl NewDraft {
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            ..Self::default()
        }
    }

    pub fn with_media(mut self, media_uris: Vec<String>) -> Self {
        self.media_uris = media_uris;
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn scheduled(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }
}

/// Partial update of a draft. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEdit {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub media_uris: Option<Vec<String>>,
    pub platforms: Option<Vec<Platform>>,
    /// `Some(None)` clears the schedule.
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
}

impl DraftEdit {
    pub fn reschedule(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(Some(at));
        self
    }

    pub fn clear_schedule(mut self) -> Self {
        self.scheduled_at = Some(None);
        self
    }
}
