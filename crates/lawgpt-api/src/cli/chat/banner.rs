//! Welcome banner display for chat sessions.

use console::style;

use lawgpt_types::config::SubmitPolicy;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(endpoint: &str, policy: SubmitPolicy) {
    println!();
    println!("  {} {}", style("\u{2696}").cyan(), style("LawGPT").cyan().bold());
    println!(
        "  {}",
        style("Legal research assistant for the Constitution of India").dim()
    );
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(endpoint).dim());
    println!("  {}   {}", style("Policy:").bold(), style(policy).dim());
    println!();
    println!(
        "  {}",
        style("Type a question, /suggest for ideas, /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
