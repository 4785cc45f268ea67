//! Echo conversation handler.
//!
//! Placeholder implementation of the `ConversationHandler` port. It answers
//! every message with the labelled echo and never fails.

use async_trait::async_trait;

use crate::domain::conversation::{echo, Turn};
use crate::ports::{ConversationError, ConversationHandler};

/// Answers with `"당신이 보낸 메시지: " + message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoConversationHandler;

impl EchoConversationHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConversationHandler for EchoConversationHandler {
    async fn reply(&self, message: &str, history: &[Turn]) -> Result<String, ConversationError> {
        Ok(echo(message, history))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}
