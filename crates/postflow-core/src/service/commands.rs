use crate::domain::{DraftEdit, NewDraft, Post};

/// A mutation the UI asks the facade to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCommand {
    CreateDraft(NewDraft),
    EditDraft { id: String, edit: DraftEdit },
    Submit { id: String },
    Approve { id: String },
    Reject { id: String, reason: Option<String> },
    Delete { id: String },
    ResetDatabase,
}

impl PostCommand {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PostCommand::CreateDraft(_) => "create_draft",
            PostCommand::EditDraft { .. } => "edit_draft",
            PostCommand::Submit { .. } => "submit_for_approval",
            PostCommand::Approve { .. } => "approve",
            PostCommand::Reject { .. } => "reject",
            PostCommand::Delete { .. } => "delete",
            PostCommand::ResetDatabase => "reset_database",
        }
    }
}

/// What a command changed, used to patch the cached collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The post was created or updated.
    Upserted(Post),
    /// The post with this id is gone.
    Removed(String),
    /// The whole collection was replaced.
    Reset,
}

impl CommandOutcome {
    pub fn post(&self) -> Option<&Post> {
        match self {
            CommandOutcome::Upserted(post) => Some(post),
            CommandOutcome::Removed(_) | CommandOutcome::Reset => None,
        }
    }
}
