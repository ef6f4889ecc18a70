//! Prompt composition for the single-turn ask flow

/// Templates for composing the outbound message
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed role-establishing instruction prepended to every question
    pub fn assistant_role() -> &'static str {
        "You are a helpful assistant that explains version-control and \
         repository-hosting concepts clearly."
    }

    /// Compose the single user message: role instruction, then the literal
    /// question. Nothing from prior calls is ever included.
    pub fn user_message(question: &str) -> String {
        format!("{}\n\nUser: {}", Self::assistant_role(), question)
    }
}
