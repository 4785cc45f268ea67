//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and whatever produces replies. Adapters implement them.
//!
//! - `ConversationHandler` - `(message, history) -> reply`

mod conversation_handler;

pub use conversation_handler::{ConversationError, ConversationHandler};
