//! HTTP DTOs for the chat UI endpoints.
//!
//! These types decouple the chat wire format from the domain `Turn`.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::Turn;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body of `POST {mount}/api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The message being sent.
    pub message: String,
    /// Transcript so far, oldest first.
    #[serde(default)]
    pub history: Vec<TurnDto>,
}

/// One transcript entry on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnDto {
    pub user: String,
    pub assistant: String,
}

impl From<TurnDto> for Turn {
    fn from(dto: TurnDto) -> Self {
        Turn::new(dto.user, dto.assistant)
    }
}

impl From<&Turn> for TurnDto {
    fn from(turn: &Turn) -> Self {
        Self {
            user: turn.user().to_string(),
            assistant: turn.assistant().to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body of `POST {mount}/api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// Reply to the message.
    pub reply: String,
    /// Request history with the new turn appended.
    pub history: Vec<TurnDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_value(json!({ "message": "hi" })).unwrap();
        assert_eq!(req.message, "hi");
        assert!(req.history.is_empty());
    }

    #[test]
    fn chat_request_requires_message() {
        let result: Result<ChatRequest, _> = serde_json::from_value(json!({ "history": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn turn_dto_converts_both_ways() {
        let dto = TurnDto {
            user: "질문".to_string(),
            assistant: "답변".to_string(),
        };
        let turn: Turn = dto.clone().into();
        assert_eq!(TurnDto::from(&turn), dto);
    }

    #[test]
    fn chat_response_serializes() {
        let response = ChatResponse {
            reply: "r".to_string(),
            history: vec![TurnDto {
                user: "m".to_string(),
                assistant: "r".to_string(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["reply"], "r");
        assert_eq!(json["history"][0]["user"], "m");
        assert_eq!(json["history"][0]["assistant"], "r");
    }
}
