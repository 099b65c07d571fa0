//! Scripted tour of the approval workflow.

use postflow_core::DomainError;
use postflow_core::domain::{Contact, DraftEdit, NewContact, NewDraft, Platform, PostStatus};
use postflow_core::ports::ContactRepository;
use postflow_core::service::PostCommand;
use postflow_shared::Notice;

use crate::state::AppState;
use crate::views::{counts_view, error_notice, post_summary};

const DEMO_REVIEWER: &str = "Dana Lee";
const DEMO_EMAIL: &str = "dana@example.com";

pub async fn run(state: &AppState) -> anyhow::Result<()> {
    print_dashboard(state, "Dashboard").await?;

    let draft = NewDraft::new("Weekend Market", "Fresh produce every Saturday morning")
        .with_platforms(vec![Platform::Instagram, Platform::Facebook]);
    let post = state.posts.create_draft(draft).await?;
    show(&Notice::success("Draft saved").with_detail(&post.title))?;

    let id = &post.id;
    let commands = vec![
        (
            "edit",
            PostCommand::EditDraft {
                id: id.clone(),
                edit: DraftEdit {
                    caption: Some("Fresh produce and live music every Saturday".into()),
                    ..DraftEdit::default()
                },
            },
        ),
        ("submit", PostCommand::Submit { id: id.clone() }),
        ("approve", PostCommand::Approve { id: id.clone() }),
        // Approved posts are terminal; this one is refused.
        ("approve", PostCommand::Approve { id: id.clone() }),
    ];

    for (action, command) in commands {
        match state.posts.execute(command).await {
            Ok(outcome) => {
                let status = outcome
                    .post()
                    .map(|post| post.status.to_string())
                    .unwrap_or_default();
                let notice = Notice::success(format!("{action} done"));
                show(&notice.with_detail(status))?;
            }
            Err(err) => show(&error_notice(action, &err))?,
        }
    }

    for pending in state.posts.get_by_status(PostStatus::Pending).await {
        let reason = Some("Please add a product photo".to_string());
        match state.posts.reject(&pending.id, reason).await {
            Ok(post) => show(&Notice::info("Post rejected").with_detail(post.title))?,
            Err(err) => show(&error_notice("reject", &err))?,
        }
    }

    let contacts = state.contacts.list().await?;
    show(&Notice::info(format!("{} reviewers available", contacts.len())))?;
    match ensure_demo_reviewer(state.contacts.as_ref()).await {
        Ok(Some(contact)) => show(&Notice::success("Reviewer added").with_detail(contact.name))?,
        Ok(None) => {}
        Err(err) => show(&error_notice("add contact", &err))?,
    }

    print_dashboard(state, "Dashboard after review").await
}

async fn print_dashboard(state: &AppState, heading: &str) -> anyhow::Result<()> {
    let counts = counts_view(&state.posts.counts().await);
    let posts = state.posts.posts().await;

    println!("== {heading} ({} posts)", counts.total());
    println!("{}", serde_json::to_string_pretty(&counts)?);
    for summary in posts.iter().map(post_summary) {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}

/// Add the demo reviewer unless a contact with that name already exists.
async fn ensure_demo_reviewer(
    contacts: &dyn ContactRepository,
) -> Result<Option<Contact>, DomainError> {
    let existing = contacts.list().await?;
    if existing.iter().any(|contact| contact.name == DEMO_REVIEWER) {
        return Ok(None);
    }

    let reviewer = NewContact::new(DEMO_REVIEWER).with_email(DEMO_EMAIL);
    contacts.add_contact(reviewer).await.map(Some)
}

fn show(notice: &Notice) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(notice)?);
    Ok(())
}
