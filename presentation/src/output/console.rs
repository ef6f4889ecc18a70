//! Console output formatting

use colored::Colorize;
use githelper_domain::Answer;

/// Fixed heading shown above every answer
pub const ANSWER_HEADING: &str = "💬 Gemini says:";

/// Warning shown when the user submits nothing
pub const EMPTY_INPUT_WARNING: &str = "Please enter a question.";

/// Formats answers and warnings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer under the fixed heading.
    ///
    /// Success and failure render the same way — heading, blank line,
    /// answer text. A failure's marker prefix comes from the answer
    /// itself, not from here.
    pub fn format_answer(answer: &Answer) -> String {
        let rendered = answer.to_string();
        let body = if answer.is_failure() {
            rendered.as_str().red().to_string()
        } else {
            rendered
        };

        format!("{}\n\n{}", ANSWER_HEADING.cyan().bold(), body)
    }

    /// The empty-input validation warning
    pub fn empty_input_warning() -> String {
        EMPTY_INPUT_WARNING.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_reply_renders_under_heading_without_marker() {
        plain();
        let answer = Answer::reply("Use `git merge --abort` to back out.");
        let output = ConsoleFormatter::format_answer(&answer);
        assert_eq!(
            output,
            "💬 Gemini says:\n\nUse `git merge --abort` to back out."
        );
    }

    #[test]
    fn test_failure_keeps_exact_marker_contract() {
        plain();
        let answer = Answer::failure("invalid api key");
        let output = ConsoleFormatter::format_answer(&answer);
        assert!(output.ends_with("❌ Error: invalid api key"));
    }

    #[test]
    fn test_empty_input_warning_text() {
        plain();
        assert_eq!(
            ConsoleFormatter::empty_input_warning(),
            "Please enter a question."
        );
    }
}
