//! Application handlers.
//!
//! Command handlers that orchestrate domain logic behind the ports.

pub mod conversation;

pub use conversation::{RespondCommand, RespondHandler, FAILURE_REPLY_PREFIX};
