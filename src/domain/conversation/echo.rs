//! Echo reply - the placeholder conversation behaviour.

use super::Turn;

/// Label prepended to every echoed message.
pub const ECHO_PREFIX: &str = "당신이 보낸 메시지: ";

/// Builds the echo reply for `message`.
///
/// Deterministic and total: the history is accepted but not consulted, and
/// every input, including the empty string, produces a reply.
pub fn echo(message: &str, _history: &[Turn]) -> String {
    format!("{ECHO_PREFIX}{message}")
}
