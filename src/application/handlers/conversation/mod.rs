//! Conversation command handlers.

mod respond;

pub use respond::{RespondCommand, RespondHandler, FAILURE_REPLY_PREFIX};
