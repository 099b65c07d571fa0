//! # Postflow Core
//!
//! The domain layer of Postflow: post drafts, the approval lifecycle and the
//! ports that storage adapters implement.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
