//! Turn value object.
//!
//! A turn is one completed exchange in a chat transcript: what the user said
//! and what the assistant answered. The transcript itself is a plain ordered
//! slice of turns owned by the browser session.

use serde::{Deserialize, Serialize};

/// One (user message, assistant reply) pair in a conversation transcript.
///
/// # Invariants
///
/// - Immutable once built; appending a reply creates a new turn
/// - Content is stored verbatim (no trimming, no normalisation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// What the user sent.
    user: String,
    /// What the assistant replied.
    assistant: String,
}

impl Turn {
    /// Creates a new turn from a user message and the reply to it.
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn assistant(&self) -> &str {
        &self.assistant
    }
}

/// Returns the transcript that follows `history` once `message` has been
/// answered with `reply`.
///
/// The input slice is left untouched; the caller gets an owned copy with the
/// new turn appended at the end.
pub fn append_turn(history: &[Turn], message: &str, reply: &str) -> Vec<Turn> {
    let mut next = Vec::with_capacity(history.len() + 1);
    next.extend_from_slice(history);
    next.push(Turn::new(message, reply));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_keeps_content_verbatim() {
        let turn = Turn::new("  안녕  ", "\n");
        assert_eq!(turn.user(), "  안녕  ");
        assert_eq!(turn.assistant(), "\n");
    }

    #[test]
    fn turn_serializes_with_named_fields() {
        let turn = Turn::new("hi", "hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["user"], "hi");
        assert_eq!(json["assistant"], "hello");
    }

    #[test]
    fn append_turn_adds_exactly_one_turn_at_the_end() {
        let history = vec![Turn::new("a", "A"), Turn::new("b", "B")];

        let next = append_turn(&history, "c", "C");

        assert_eq!(next.len(), 3);
        assert_eq!(&next[..2], &history[..]);
        assert_eq!(next[2], Turn::new("c", "C"));
    }

    #[test]
    fn append_turn_leaves_input_untouched() {
        let history = vec![Turn::new("a", "A")];
        let _ = append_turn(&history, "b", "B");
        assert_eq!(history, vec![Turn::new("a", "A")]);
    }

    #[test]
    fn append_turn_on_empty_history() {
        let next = append_turn(&[], "", "");
        assert_eq!(next, vec![Turn::new("", "")]);
    }
}
