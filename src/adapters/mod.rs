//! Adapters - Implementations of port interfaces and the HTTP surface.
//!
//! - `conversation` - `ConversationHandler` implementations
//! - `http` - Axum gateway, liveness endpoint and chat UI

pub mod conversation;
pub mod http;

pub use conversation::EchoConversationHandler;
