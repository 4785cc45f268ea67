//! Conversation domain - transcript types and the placeholder reply.
//!
//! The domain here is intentionally small: a `Turn` value object, a helper
//! that extends a transcript without mutating it, and the echo transform
//! used until a real answering pipeline is plugged in behind the
//! `ConversationHandler` port.

mod echo;
mod turn;

pub use echo::{echo, ECHO_PREFIX};
pub use turn::{append_turn, Turn};
