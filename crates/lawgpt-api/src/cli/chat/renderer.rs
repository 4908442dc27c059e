//! Terminal rendering for answers and conversation history.
//!
//! Answers from the backend are markdown; `termimad` renders them for the
//! terminal. Failed exchanges show the fallback message in red instead.

use console::style;
use termimad::MadSkin;
use termimad::crossterm::style::Color;

use lawgpt_types::exchange::{Conversation, Exchange, ExchangeStatus};

/// Markdown renderer for chat output.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render an answer's markdown body.
    pub fn render_markdown(&self, markdown: &str) -> String {
        self.skin.term_text(markdown).to_string()
    }

    /// Render the answer half of an exchange, tagged with its short id.
    ///
    /// Pending exchanges render as a dim placeholder.
    pub fn render_answer(&self, exchange: &Exchange) -> String {
        let tag = style(format!("[{}]", exchange.id.short())).dim();
        match (exchange.status, exchange.answer.as_deref()) {
            (ExchangeStatus::Answered, Some(answer)) => {
                format!(
                    "\n  {} {tag}\n{}\n",
                    style("LawGPT >").cyan().bold(),
                    self.render_markdown(answer).trim_end()
                )
            }
            (ExchangeStatus::Failed, answer) => {
                format!(
                    "\n  {} {tag}\n  {}\n",
                    style("LawGPT >").red().bold(),
                    style(answer.unwrap_or_default()).red()
                )
            }
            _ => format!("  {} {tag}\n", style("waiting for an answer...").dim()),
        }
    }

    /// Render the whole conversation, oldest first.
    pub fn render_history(&self, conversation: &Conversation) -> String {
        if conversation.is_empty() {
            return format!("\n  {}\n", style("No questions asked yet.").dim());
        }

        let mut out = String::new();
        for (index, exchange) in conversation.iter().enumerate() {
            out.push_str(&format!(
                "\n  {} {}\n",
                style(format!("{}. You >", index + 1)).green().bold(),
                exchange.question
            ));
            out.push_str(&self.render_answer(exchange));
        }
        out
    }
}

/// One-line summary of the conversation's state.
pub fn status_line(conversation: &Conversation) -> String {
    let count = |status: ExchangeStatus| {
        conversation
            .iter()
            .filter(|exchange| exchange.status == status)
            .count()
    };
    format!(
        "  {} {} pending {} {} answered {} {} failed",
        style("|").dim(),
        style(count(ExchangeStatus::Pending)).yellow(),
        style("\u{00b7}").dim(),
        style(count(ExchangeStatus::Answered)).green(),
        style("\u{00b7}").dim(),
        style(count(ExchangeStatus::Failed)).red(),
    )
}
