//! Question value object

use serde::{Deserialize, Serialize};

/// A question to be answered by the model (Value Object)
///
/// Represents one user input, consumed by exactly one outbound call.
/// Emptiness is checked on the string exactly as given — the shell
/// contract performs no trimming, so a whitespace-only question is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is the empty string
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, returning None if empty
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
