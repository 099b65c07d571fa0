//! Fixed demo dataset installed on first run and on reset.

use chrono::{DateTime, Duration, Utc};

use super::contact::Contact;
use super::post::{
    APPROVER_USER, AuditAction, AuditEntry, CURRENT_USER, Platform, Post, PostStatus,
};

/// One post per status, with audit trails that end in that status.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    let ago = |ms: i64| now - Duration::milliseconds(ms);
    let entry = |at, actor: &str, action| AuditEntry::new(at, actor, action);
    let rejection = "Please tone down the language and make it more professional".to_string();

    vec![
        Post {
            id: "draft-1".into(),
            title: "Morning Coffee Vibes".into(),
            caption: "Starting the day with a fresh cup of coffee and good vibes ☕".into(),
            media_uris: vec![],
            platforms: vec![Platform::Instagram, Platform::Facebook],
            scheduled_at: None,
            status: PostStatus::Draft,
            rejection_reason: None,
            created_by: CURRENT_USER.into(),
            created_at: now,
            updated_at: now,
            audit: vec![entry(now, CURRENT_USER, AuditAction::Create)],
        },
        Post {
            id: "pending-1".into(),
            title: "New Product Launch".into(),
            caption: "Excited to announce our new product! Available next week 🚀".into(),
            media_uris: vec![],
            platforms: vec![Platform::Instagram, Platform::Tiktok, Platform::Linkedin],
            scheduled_at: Some(now + Duration::days(1)),
            status: PostStatus::Pending,
            rejection_reason: None,
            created_by: CURRENT_USER.into(),
            created_at: ago(3_600_000),
            updated_at: ago(1_800_000),
            audit: vec![
                entry(ago(3_600_000), CURRENT_USER, AuditAction::Create),
                entry(ago(1_800_000), CURRENT_USER, AuditAction::Submit),
            ],
        },
        Post {
            id: "approved-1".into(),
            title: "Team Celebration".into(),
            caption: "Celebrating our amazing team and their hard work! 🎉".into(),
            media_uris: vec![],
            platforms: vec![Platform::Facebook, Platform::Linkedin],
            scheduled_at: None,
            status: PostStatus::Approved,
            rejection_reason: None,
            created_by: CURRENT_USER.into(),
            created_at: ago(86_400_000),
            updated_at: ago(43_200_000),
            audit: vec![
                entry(ago(86_400_000), CURRENT_USER, AuditAction::Create),
                entry(ago(72_000_000), CURRENT_USER, AuditAction::Submit),
                entry(ago(43_200_000), APPROVER_USER, AuditAction::Approve),
            ],
        },
        Post {
            id: "rejected-1".into(),
            title: "Controversial Post".into(),
            caption: "This post needs revision before publishing".into(),
            media_uris: vec![],
            platforms: vec![Platform::X],
            scheduled_at: None,
            status: PostStatus::Rejected,
            rejection_reason: Some(rejection.clone()),
            created_by: CURRENT_USER.into(),
            created_at: ago(172_800_000),
            updated_at: ago(86_400_000),
            audit: vec![
                entry(ago(172_800_000), CURRENT_USER, AuditAction::Create),
                entry(ago(158_400_000), CURRENT_USER, AuditAction::Submit),
                entry(ago(86_400_000), APPROVER_USER, AuditAction::Reject)
                    .with_note(Some(rejection)),
            ],
        },
    ]
}

/// Demo reviewers.
pub fn seed_contacts() -> Vec<Contact> {
    [
        ("1", "Alice Johnson", "alice@example.com"),
        ("2", "Bob Smith", "bob@example.com"),
        ("3", "Carol White", "carol@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| Contact {
        id: id.into(),
        name: name.into(),
        email: Some(email.into()),
        phone_number: None,
    })
    .collect()
}
