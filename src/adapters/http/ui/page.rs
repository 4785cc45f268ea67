//! Server-side rendering of the chat page.
//!
//! The page is a single self-contained HTML document. The transcript lives
//! in browser memory and is sent back with each message, so nothing about
//! the conversation is kept on the server.

use super::ChatInterface;

const TEMPLATE: &str = include_str!("page.html");

/// Renders the chat page for `ui`, posting messages to `chat_endpoint`.
pub fn render_page(ui: &ChatInterface, chat_endpoint: &str) -> String {
    TEMPLATE
        .replace("{{TITLE}}", &escape_html(&ui.title))
        .replace("{{HEADING}}", &escape_html(&ui.heading))
        .replace("{{DESCRIPTION}}", &escape_html(&ui.description))
        .replace("{{PLACEHOLDER}}", &escape_html(&ui.placeholder))
        .replace("{{CHAT_HEIGHT}}", &ui.chat_height.to_string())
        .replace("{{CHAT_ENDPOINT}}", &escape_html(chat_endpoint))
        .replace("{{APP_NAME}}", env!("CARGO_PKG_NAME"))
        .replace("{{APP_VERSION}}", env!("CARGO_PKG_VERSION"))
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
