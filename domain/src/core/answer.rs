//! Answer value object
//!
//! The unified result of one interaction. Callers match on the variant to
//! distinguish outcomes programmatically; the `Display` impl preserves the
//! user-facing string contract, where failures carry a fixed marker prefix.

use serde::{Deserialize, Serialize};

/// Marker prefix rendered in front of failure messages
pub const ERROR_MARKER: &str = "❌ Error: ";

/// The result of asking the model one question (Value Object)
///
/// An `Answer` always exists after a call completes — faults are carried
/// as `Failure`, never raised past the wrapper boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// The model's reply text, unmodified
    Reply(String),
    /// A fault description from the outbound call
    Failure(String),
}

impl Answer {
    pub fn reply(text: impl Into<String>) -> Self {
        Answer::Reply(text.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Answer::Failure(message.into())
    }

    /// Whether this answer is a genuine model reply
    pub fn is_reply(&self) -> bool {
        matches!(self, Answer::Reply(_))
    }

    /// Whether this answer carries a fault description
    pub fn is_failure(&self) -> bool {
        matches!(self, Answer::Failure(_))
    }

    /// The inner text: reply content or fault message, without the marker
    pub fn text(&self) -> &str {
        match self {
            Answer::Reply(text) | Answer::Failure(text) => text,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Reply(text) => write!(f, "{}", text),
            Answer::Failure(message) => write!(f, "{}{}", ERROR_MARKER, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_renders_verbatim() {
        let answer = Answer::reply("A merge conflict occurs when...");
        assert_eq!(answer.to_string(), "A merge conflict occurs when...");
        assert!(answer.is_reply());
        assert!(!answer.is_failure());
    }

    #[test]
    fn test_failure_renders_with_marker() {
        let answer = Answer::failure("invalid api key");
        assert_eq!(answer.to_string(), "❌ Error: invalid api key");
        assert!(answer.is_failure());
    }

    #[test]
    fn test_failure_message_passthrough_is_literal() {
        // The fault message is not reformatted, only prefixed
        let answer = Answer::failure("HTTP error: 503 Service Unavailable");
        assert_eq!(
            answer.to_string(),
            format!("{}HTTP error: 503 Service Unavailable", ERROR_MARKER)
        );
    }

    #[test]
    fn test_text_strips_nothing_from_reply() {
        let answer = Answer::reply("  padded  ");
        assert_eq!(answer.text(), "  padded  ");
    }
}
