//! HTTP adapter for the mounted chat UI.
//!
//! `ChatInterface` bundles the page texts with the `ConversationHandler`
//! that answers messages. Turning it into a router fixes the mount path,
//! which the page needs to know where to post messages.

pub mod dto;
pub mod handlers;
pub mod page;
pub mod routes;

pub use dto::{ChatRequest, ChatResponse, TurnDto};
pub use handlers::ChatUiState;
pub use routes::{chat_ui_routes, CHAT_API_PATH};

use std::sync::Arc;

use axum::body::Bytes;
use axum::Router;

use crate::application::RespondHandler;
use crate::config::UiConfig;
use crate::ports::ConversationHandler;

/// A chat widget ready to be mounted on the gateway.
#[derive(Clone)]
pub struct ChatInterface {
    conversation: Arc<dyn ConversationHandler>,
    title: String,
    heading: String,
    description: String,
    placeholder: String,
    chat_height: u32,
}

impl ChatInterface {
    /// Creates a chat interface with the default texts.
    pub fn new(conversation: Arc<dyn ConversationHandler>) -> Self {
        Self::from_config(conversation, &UiConfig::default())
    }

    /// Creates a chat interface using the texts and layout from `config`.
    pub fn from_config(conversation: Arc<dyn ConversationHandler>, config: &UiConfig) -> Self {
        Self {
            conversation,
            title: config.title.clone(),
            heading: config.heading.clone(),
            description: config.description.clone(),
            placeholder: config.placeholder.clone(),
            chat_height: config.chat_height,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the router serving this interface under `mount_path`.
    ///
    /// The returned router already carries its full paths; merge it into
    /// the gateway rather than nesting it. `mount_path` must have passed
    /// `UiConfig::validate`.
    pub fn into_router(self, mount_path: &str) -> Router {
        let endpoint = format!("{mount_path}{CHAT_API_PATH}");
        let state = ChatUiState {
            page: Bytes::from(page::render_page(&self, &endpoint)),
            respond: RespondHandler::new(self.conversation),
        };

        chat_ui_routes(mount_path).with_state(state)
    }
}
