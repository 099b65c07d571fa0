//! Data Transfer Objects - list and dashboard rows for the UI.

use serde::{Deserialize, Serialize};

/// One row of a post list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    pub platforms: Vec<String>,
    pub media_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub updated_at: String,
}

/// Per-status counters for the dashboard tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsView {
    pub draft: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl CountsView {
    pub fn total(&self) -> usize {
        self.draft + self.pending + self.approved + self.rejected
    }
}
