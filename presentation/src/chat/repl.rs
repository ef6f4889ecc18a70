//! REPL (Read-Eval-Print Loop) for interactive questions
//!
//! Each submission is one independent ask: validate, show the spinner,
//! render the answer. Nothing from one submission feeds the next — the
//! rustyline history only serves line editing.

use crate::ConsoleFormatter;
use crate::Spinner;
use githelper_application::AskUseCase;
use githelper_domain::Question;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};

/// Interactive question REPL
pub struct ChatRepl {
    use_case: AskUseCase,
    show_spinner: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AskUseCase) -> Self {
        let history_file = dirs::data_dir().map(|p| p.join("githelper").join("history.txt"));
        Self {
            use_case,
            show_spinner: true,
            history_file,
        }
    }

    /// Set whether to show the spinner while waiting
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Override the line-edit history location (None disables persistence)
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// The effective history file location
    pub fn history_file(&self) -> Option<&Path> {
        self.history_file.as_deref()
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    if !line.is_empty() && !line.starts_with('/') {
                        let _ = rl.add_history_entry(&line);
                    }
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one submitted line. Returns true if the REPL should exit.
    ///
    /// An empty line gets the validation warning and never reaches the
    /// use case; input is taken exactly as typed, with no trimming.
    async fn handle_line(&self, line: &str) -> bool {
        if line.is_empty() {
            println!("{}", ConsoleFormatter::empty_input_warning());
            return false;
        }

        if line.starts_with('/') {
            return self.handle_command(line);
        }

        self.process_question(Question::new(line)).await;
        false
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        githelper - Git & GitHub Q&A         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /model    - Show current and available models");
        println!("  /quit     - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show current and available models");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/model" => {
                println!("Current model: {}", self.use_case.model());
                println!(
                    "Available: {}",
                    self.use_case
                        .available_models()
                        .iter()
                        .map(|m| m.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: Question) {
        println!();

        let answer = if self.show_spinner {
            let spinner = Spinner::start("Thinking...");
            let answer = self.use_case.execute(question).await;
            spinner.finish();
            answer
        } else {
            self.use_case.execute(question).await
        };

        println!("{}", ConsoleFormatter::format_answer(&answer));
        println!();
    }
}
