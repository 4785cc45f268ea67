//! Application layer - Commands and Handlers.
//!
//! This layer sits between the HTTP adapters and the `ConversationHandler`
//! port, enforcing the rule that handler failures become replies.

pub mod handlers;

pub use handlers::{RespondCommand, RespondHandler, FAILURE_REPLY_PREFIX};
