//! Conversation handler adapters.

mod echo_handler;

pub use echo_handler::EchoConversationHandler;
