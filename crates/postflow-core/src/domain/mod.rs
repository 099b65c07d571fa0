//! Domain entities - the core business objects.

mod contact;
mod counts;
mod lifecycle;
mod post;
pub mod seed;

pub use contact::{Contact, NewContact};
pub use counts::StatusCounts;
pub use lifecycle::{allowed_next_states, transition_for};
pub use post::{
    APPROVER_USER, AuditAction, AuditEntry, CURRENT_USER, DraftEdit, NewDraft, Platform, Post,
    PostStatus,
};
