//! RespondHandler - the reply seam between transport and conversation logic.
//!
//! Every chat request goes through here. A failing `ConversationHandler`
//! is turned into a reply the user can read, so the chat UI keeps working
//! when a backing service is down.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::conversation::Turn;
use crate::ports::{ConversationError, ConversationHandler};

/// Prefix of the reply shown when the handler fails.
pub const FAILURE_REPLY_PREFIX: &str = "요청을 처리하는 중 오류가 발생했습니다: ";

/// Command to answer one chat message.
#[derive(Debug, Clone, Copy)]
pub struct RespondCommand<'a> {
    pub message: &'a str,
    pub history: &'a [Turn],
}

/// Handler producing the reply for a single chat turn.
#[derive(Clone)]
pub struct RespondHandler {
    conversation: Arc<dyn ConversationHandler>,
}

impl RespondHandler {
    pub fn new(conversation: Arc<dyn ConversationHandler>) -> Self {
        Self { conversation }
    }

    /// Returns the reply text. Never fails.
    pub async fn handle(&self, cmd: RespondCommand<'_>) -> String {
        debug!(
            handler = self.conversation.name(),
            message_len = cmd.message.len(),
            history_len = cmd.history.len(),
            "answering chat message"
        );

        match self.conversation.reply(cmd.message, cmd.history).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(handler = self.conversation.name(), error = %err, "conversation handler failed");
                failure_reply(&err)
            }
        }
    }
}

fn failure_reply(err: &ConversationError) -> String {
    format!("{FAILURE_REPLY_PREFIX}{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::conversation::EchoConversationHandler;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FailingHandler {
        error: ConversationError,
    }

    #[async_trait]
    impl ConversationHandler for FailingHandler {
        async fn reply(&self, _message: &str, _history: &[Turn]) -> Result<String, ConversationError> {
            Err(self.error.clone())
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Records the history length it was called with.
    struct RecordingHandler {
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl ConversationHandler for RecordingHandler {
        async fn reply(&self, message: &str, history: &[Turn]) -> Result<String, ConversationError> {
            self.seen.lock().unwrap().push(history.len());
            Ok(message.to_string())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn passes_through_successful_reply() {
        let handler = RespondHandler::new(Arc::new(EchoConversationHandler::new()));
        let reply = handler
            .handle(RespondCommand {
                message: "hi",
                history: &[],
            })
            .await;
        assert_eq!(reply, "당신이 보낸 메시지: hi");
    }

    #[tokio::test]
    async fn converts_handler_error_into_reply() {
        let handler = RespondHandler::new(Arc::new(FailingHandler {
            error: ConversationError::unavailable("index offline"),
        }));

        let reply = handler
            .handle(RespondCommand {
                message: "hi",
                history: &[],
            })
            .await;

        assert_eq!(
            reply,
            "요청을 처리하는 중 오류가 발생했습니다: backend unavailable: index offline"
        );
    }

    #[tokio::test]
    async fn forwards_history_to_handler() {
        let recorder = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        let handler = RespondHandler::new(recorder.clone());
        let history = vec![Turn::new("a", "A"), Turn::new("b", "B")];

        handler
            .handle(RespondCommand {
                message: "c",
                history: &history,
            })
            .await;

        assert_eq!(*recorder.seen.lock().unwrap(), vec![2]);
        assert_eq!(history.len(), 2);
    }
}
