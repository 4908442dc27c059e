//! LawGPT command-line client.
//!
//! Binary name: `lawgpt`
//!
//! Parses CLI arguments, initializes tracing and client state, then
//! dispatches to the chat loop or a one-shot command.

mod cli;
mod state;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use lawgpt_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,lawgpt=debug",
        _ => "trace",
    };
    init_tracing(&TracingOptions::new(filter).json(cli.json).otel(cli.otel))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        // Static content and completions don't need client state
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "lawgpt", &mut std::io::stdout());
        }

        Commands::Rights { query } => {
            cli::rights::show_rights(query.as_deref(), cli.json)?;
        }

        Commands::Suggestions => {
            cli::suggestions::show_suggestions(cli.json)?;
        }

        Commands::Config => {
            let state = AppState::init(cli.endpoint, cli.timeout).await?;
            cli::config::show_config(&state, cli.json)?;
        }

        Commands::Ask { question } => {
            let state = AppState::init(cli.endpoint, cli.timeout).await?;
            let answered =
                cli::ask::ask_once(&state, &question.join(" "), cli.json, cli.quiet).await?;
            if !answered {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Chat { single_flight } => {
            let state = AppState::init(cli.endpoint, cli.timeout).await?;
            cli::chat::loop_runner::run_chat_loop(&state, single_flight).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
