//! CLI command definitions for the `lawgpt` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod config;
pub mod rights;
pub mod suggestions;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Ask legal questions and browse the Fundamental Rights of India.
#[derive(Parser)]
#[command(name = "lawgpt", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Answer API endpoint (overrides config.toml).
    #[arg(long, global = true, env = "LAWGPT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds (overrides config.toml).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Refuse a new question while the previous one is unanswered.
        #[arg(long)]
        single_flight: bool,
    },

    /// Ask a single question and print the answer.
    Ask {
        /// The question to ask.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Show the Fundamental Rights catalogue, or one entry in detail.
    Rights {
        /// Article number (e.g. 21) or part of a title (e.g. "equality").
        query: Option<String>,
    },

    /// List the suggested starter questions.
    Suggestions,

    /// Show the effective client configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
