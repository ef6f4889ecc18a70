//! CLI entrypoint for githelper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use githelper_application::AskUseCase;
use githelper_domain::{Model, Question};
use githelper_infrastructure::{ConfigLoader, GeminiGateway};
use githelper_presentation::{ChatRepl, Cli, ConsoleFormatter, Spinner};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration once at startup; a missing API key is not an
    // error here, it surfaces on first use
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let history_file = config.repl.history_file.clone().map(Into::into);
    let settings = config.into_settings();

    // CLI model flag wins over configuration
    let model: Model = match &cli.model {
        Some(name) => name.parse().unwrap(),
        None => settings.model.clone(),
    };

    info!(model = %model, "Starting githelper");

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(&settings));
    let use_case = AskUseCase::new(gateway, model);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case).with_spinner(!cli.quiet);

        // Config may relocate the history file; absence keeps the
        // data-dir default
        if let Some(path) = history_file {
            repl = repl.with_history_file(Some(path));
        }

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let raw_input = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    // Empty input gets the validation warning; nothing is sent
    let Some(question) = Question::try_new(raw_input) else {
        println!("{}", ConsoleFormatter::empty_input_warning());
        return Ok(());
    };

    let answer = if cli.quiet {
        use_case.execute(question).await
    } else {
        let spinner = Spinner::start("Thinking...");
        let answer = use_case.execute(question).await;
        spinner.finish();
        answer
    };

    println!("{}", ConsoleFormatter::format_answer(&answer));

    Ok(())
}
