//! Chat UI configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Path reserved for the liveness endpoint. Must match the route in
/// `adapters::http::health`.
const HEALTH_PATH: &str = "/health";

const MIN_CHAT_HEIGHT: u32 = 100;
const MAX_CHAT_HEIGHT: u32 = 2000;

/// Chat UI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Sub-path the chat page is mounted under
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Chat box title
    #[serde(default = "default_title")]
    pub title: String,

    /// Page heading
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Text shown under the heading
    #[serde(default = "default_description")]
    pub description: String,

    /// Placeholder of the message input
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Height of the transcript area in pixels
    #[serde(default = "default_chat_height")]
    pub chat_height: u32,
}

impl UiConfig {
    /// Validate UI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let path = self.mount_path.as_str();
        let invalid = !path.starts_with('/')
            || path.len() == 1
            || path.ends_with('/')
            || path == HEALTH_PATH
            || path.starts_with(&format!("{HEALTH_PATH}/"))
            || path[1..].split('/').any(is_invalid_segment);
        if invalid {
            return Err(ValidationError::InvalidMountPath(path.to_string()));
        }
        if !(MIN_CHAT_HEIGHT..=MAX_CHAT_HEIGHT).contains(&self.chat_height) {
            return Err(ValidationError::InvalidChatHeight {
                min: MIN_CHAT_HEIGHT,
                max: MAX_CHAT_HEIGHT,
            });
        }
        Ok(())
    }
}

/// Rejects empty segments and anything the router would read as a path
/// parameter or wildcard.
fn is_invalid_segment(segment: &str) -> bool {
    segment.is_empty()
        || segment.starts_with(':')
        || segment.starts_with('*')
        || segment.contains(['{', '}'])
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mount_path: default_mount_path(),
            title: default_title(),
            heading: default_heading(),
            description: default_description(),
            placeholder: default_placeholder(),
            chat_height: default_chat_height(),
        }
    }
}

fn default_mount_path() -> String {
    "/ui".to_string()
}

fn default_title() -> String {
    "Doc QA Agent".to_string()
}

fn default_heading() -> String {
    "📚 Doc QA Agent (Step 1: 서버 골격 테스트)".to_string()
}

fn default_description() -> String {
    "이 챗봇은 현재 단순 Echo 봇입니다.\n다음 단계에서 문서 검색과 추론 파이프라인으로 바꿉니다.".to_string()
}

fn default_placeholder() -> String {
    "여기에 질문을 입력하세요.".to_string()
}

fn default_chat_height() -> u32 {
    400
}
