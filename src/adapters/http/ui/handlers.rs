//! HTTP handlers for the chat UI.
//!
//! These handlers connect Axum routes to the reply seam. Neither can fail
//! on its own; body rejections are left to the `Json` extractor.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::response::Html;

use crate::application::{RespondCommand, RespondHandler};
use crate::domain::conversation::{append_turn, Turn};

use super::dto::{ChatRequest, ChatResponse, TurnDto};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state of the mounted chat UI.
///
/// Cloned per request; the page is rendered once at mount time.
#[derive(Clone)]
pub struct ChatUiState {
    pub respond: RespondHandler,
    pub page: Bytes,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET {mount} - Serve the chat page
pub async fn chat_page(State(state): State<ChatUiState>) -> Html<Bytes> {
    Html(state.page)
}

/// POST {mount}/api/chat - Answer one message
pub async fn send_chat_message(
    State(state): State<ChatUiState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let history: Vec<Turn> = request.history.into_iter().map(Turn::from).collect();

    let reply = state
        .respond
        .handle(RespondCommand {
            message: &request.message,
            history: &history,
        })
        .await;

    let next = append_turn(&history, &request.message, &reply);

    Json(ChatResponse {
        reply,
        history: next.iter().map(TurnDto::from).collect(),
    })
}
