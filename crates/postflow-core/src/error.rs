//! Domain-level error types.

use thiserror::Error;

use crate::domain::{AuditAction, PostStatus};
use crate::ports::StorageError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Invalid transition: cannot {action} post {id} while it is {from}")]
    InvalidTransition {
        id: String,
        from: PostStatus,
        action: AuditAction,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "post",
            id: id.into(),
        }
    }

    pub fn contact_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "contact",
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}
