//! Axum routes for the chat UI.
//!
//! Routes are registered at their full paths under the mount path. The page
//! answers both with and without a trailing slash.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat_page, send_chat_message, ChatUiState};

/// Path of the chat endpoint relative to the mount path.
pub const CHAT_API_PATH: &str = "/api/chat";

/// Creates routes for the chat UI mounted at `mount_path`.
///
/// - GET {mount} - Chat page
/// - GET {mount}/ - Chat page
/// - POST {mount}/api/chat - Answer one message
pub fn chat_ui_routes(mount_path: &str) -> Router<ChatUiState> {
    Router::new()
        .route(mount_path, get(chat_page))
        .route(&format!("{mount_path}/"), get(chat_page))
        .route(&format!("{mount_path}{CHAT_API_PATH}"), post(send_chat_message))
}
