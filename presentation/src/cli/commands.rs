//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for githelper
#[derive(Parser, Debug)]
#[command(name = "githelper")]
#[command(author, version, about = "Ask Git and GitHub questions from your terminal")]
#[command(long_about = r#"
githelper forwards one question at a time to a hosted Gemini model and
prints the reply. Each question is answered independently - there is no
conversation memory between questions.

The API credential is read from the GEMINI_API_KEY environment variable
(or from configuration). A missing key is only reported when a question
is actually sent.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./githelper.toml    Project-level config
3. ~/.config/githelper/config.toml   Global config

Example:
  githelper "What is a merge conflict?"
  githelper -m gemini-1.5-pro "How do I undo the last commit?"
  githelper --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
