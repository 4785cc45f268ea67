//! Conversation Handler Port - the seam where reply logic plugs in.
//!
//! The transport only ever sees `(message, history) -> reply`. Swapping the
//! echo adapter for a retrieval-backed one must not require any change to
//! the HTTP layer or to the chat page.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct Shout;
//!
//! #[async_trait]
//! impl ConversationHandler for Shout {
//!     async fn reply(&self, message: &str, _history: &[Turn]) -> Result<String, ConversationError> {
//!         Ok(message.to_uppercase())
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::Turn;

/// Port for producing a reply to the latest user message.
///
/// Implementations must be stateless between calls (or hold only
/// thread-safe shared state) since one instance serves every request
/// concurrently. History is borrowed read-only.
#[async_trait]
pub trait ConversationHandler: Send + Sync {
    /// Produce the reply to `message` given the prior `history`.
    async fn reply(&self, message: &str, history: &[Turn]) -> Result<String, ConversationError>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Errors a conversation handler may report.
///
/// These never reach the HTTP response as a failure; the reply seam turns
/// them into a visible reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    /// A backing service (model, retriever, index) could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Any other failure inside the handler.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConversationError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
