//! # Postflow Shared
//!
//! View types handed to the UI layer.
//! Plain strings and numbers only, so any front end can render them.

pub mod dto;
pub mod notice;

pub use dto::{CountsView, PostSummary};
pub use notice::{Notice, NoticeLevel};
