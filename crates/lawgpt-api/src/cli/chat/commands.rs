//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the
//! conversation, suggested questions, and the rights catalogue.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Discard the conversation and start over.
    New,
    /// Print every exchange in the conversation.
    History,
    /// Show pending/answered/failed counts.
    Status,
    /// List suggested questions, or submit the numbered one.
    Suggest(Option<usize>),
    /// Show the rights catalogue, or one entry.
    Rights(Option<String>),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/new" | "/reset" => Some(ChatCommand::New),
        "/history" => Some(ChatCommand::History),
        "/status" => Some(ChatCommand::Status),
        "/suggest" | "/s" => match arg {
            None => Some(ChatCommand::Suggest(None)),
            Some(n) => match n.parse::<usize>() {
                Ok(n) => Some(ChatCommand::Suggest(Some(n))),
                Err(_) => Some(ChatCommand::Unknown(
                    "/suggest takes a question number".to_string(),
                )),
            },
        },
        "/rights" => Some(ChatCommand::Rights(arg)),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help text listing all available commands.
pub fn help_text() -> String {
    let rows = [
        ("/help", "Show this help message"),
        ("/new", "Start a new conversation"),
        ("/suggest [n]", "List suggested questions, or ask number n"),
        ("/history", "Show the conversation so far"),
        ("/status", "Show pending and answered questions"),
        ("/rights [q]", "Browse the Fundamental Rights"),
        ("/clear", "Clear the screen"),
        ("/exit", "End the chat session"),
    ];

    let mut out = format!("\n  {}\n\n", style("Available commands:").bold());
    for (cmd, desc) in rows {
        out.push_str(&format!("  {}  {desc}\n", style(format!("{cmd:<13}")).cyan()));
    }
    out.push_str(&format!(
        "\n  {}\n",
        style("Questions run in the background; keep typing while you wait.").dim()
    ));
    out
}
