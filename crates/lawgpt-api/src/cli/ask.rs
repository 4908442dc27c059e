//! `lawgpt ask` -- one question, one answer, then exit.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use lawgpt_core::conversation::{ConversationController, SubmitOutcome};
use lawgpt_types::exchange::ExchangeStatus;

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

/// Ask a single question and print the result.
///
/// Returns `true` when the backend answered, `false` when the exchange
/// failed (the fallback message is still printed).
pub async fn ask_once(state: &AppState, question: &str, json: bool, quiet: bool) -> anyhow::Result<bool> {
    let mut controller = ConversationController::from_config(state.client.clone(), &state.config);
    controller.set_input(question);

    let id = match controller.submit() {
        SubmitOutcome::Accepted(id) => id,
        SubmitOutcome::Empty => anyhow::bail!("Question must not be empty"),
        SubmitOutcome::Busy => anyhow::bail!("A question is already pending"),
    };

    let spinner = (!json && !quiet).then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message("consulting LawGPT...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    controller.settle().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let conversation = controller.conversation();
    let exchange = conversation
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Exchange {id} vanished from the conversation"))?;
    let answered = exchange.status == ExchangeStatus::Answered;

    if json {
        println!("{}", serde_json::to_string_pretty(exchange)?);
    } else if answered {
        let renderer = ChatRenderer::new();
        let body = exchange.answer.as_deref().unwrap_or_default();
        println!("{}", renderer.render_markdown(body).trim_end());
    } else {
        eprintln!(
            "  {} {}",
            style("!").red().bold(),
            style(exchange.answer.as_deref().unwrap_or_default()).red()
        );
    }

    Ok(answered)
}
