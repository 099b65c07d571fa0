//! Application services over the ports.

mod commands;
mod posts;

pub use commands::{CommandOutcome, PostCommand};
pub use posts::PostsFacade;
