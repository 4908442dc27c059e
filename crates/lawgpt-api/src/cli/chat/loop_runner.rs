//! Main chat loop orchestration.
//!
//! One task owns the [`ConversationController`]. The loop waits on two
//! sources at once: the next line typed at the prompt and the next
//! completion from a request task. Answers therefore appear while the user
//! keeps typing, each printed against the exchange that asked for it.

use std::io::Write;

use console::style;
use rustyline_async::SharedWriter;
use tracing::{debug, info};

use lawgpt_core::conversation::{ConversationController, Resolution, SubmitOutcome};
use lawgpt_infra::http::HttpAnswerClient;
use lawgpt_types::config::SubmitPolicy;
use lawgpt_types::rights::find_right;
use lawgpt_types::suggestion::{SUGGESTED_QUESTIONS, suggested_question};

use crate::cli::rights::{render_overview, render_right};
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{ChatRenderer, status_line};

/// What the loop should do after handling one line.
enum Flow {
    Continue,
    Exit,
}

/// Prompt text; shows how many questions are still waiting for an answer.
fn prompt_for(pending: usize) -> String {
    if pending == 0 {
        format!("  {} ", style("You >").green().bold())
    } else {
        format!(
            "  {} {} ",
            style(format!("({pending} pending)")).yellow(),
            style("You >").green().bold()
        )
    }
}

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(state: &AppState, single_flight: bool) -> anyhow::Result<()> {
    let mut controller = ConversationController::from_config(state.client.clone(), &state.config);
    if single_flight {
        controller = controller.with_policy(SubmitPolicy::SingleFlight);
    }

    print_welcome_banner(state.client.endpoint(), controller.policy());

    let renderer = ChatRenderer::new();
    let (mut chat_input, mut out) = ChatInput::new(prompt_for(0))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    info!(endpoint = state.client.endpoint(), policy = %controller.policy(), "Chat session started");

    loop {
        tokio::select! {
            event = chat_input.read_line() => {
                let flow = match event {
                    InputEvent::Eof => Flow::Exit,
                    InputEvent::Interrupted => {
                        // Ctrl+C only discards the line being typed.
                        writeln!(out, "  {}", style("(Ctrl+D or /exit to leave)").dim())?;
                        Flow::Continue
                    }
                    InputEvent::Line(line) => {
                        handle_line(&line, &mut controller, &mut chat_input, &renderer, &mut out)?
                    }
                };
                if let Flow::Exit = flow {
                    break;
                }
            }
            Some(resolution) = controller.next_resolution(), if controller.has_outstanding() => {
                print_resolution(&resolution, &controller, &renderer, &mut out)?;
            }
        }

        chat_input.update_prompt(&prompt_for(controller.conversation().pending_count()));
    }

    let pending = controller.conversation().pending_count();
    controller.shutdown();
    info!(
        exchanges = controller.conversation().len(),
        abandoned = pending,
        "Chat session ended"
    );

    writeln!(out, "\n  {}", style("Session ended.").dim())?;
    chat_input.finish();
    Ok(())
}

fn handle_line(
    line: &str,
    controller: &mut ConversationController<HttpAnswerClient>,
    chat_input: &mut ChatInput,
    renderer: &ChatRenderer,
    out: &mut SharedWriter,
) -> anyhow::Result<Flow> {
    let Some(command) = commands::parse(line) else {
        controller.set_input(line);
        let outcome = controller.submit();
        report_submission(outcome, out)?;
        return Ok(Flow::Continue);
    };

    match command {
        ChatCommand::Help => write!(out, "{}", commands::help_text())?,
        ChatCommand::Clear => chat_input.clear(),
        ChatCommand::Exit => return Ok(Flow::Exit),
        ChatCommand::New => {
            let abandoned = controller.conversation().pending_count();
            controller.reset();
            if abandoned > 0 {
                writeln!(
                    out,
                    "  {} {}",
                    style("New conversation.").bold(),
                    style(format!("{abandoned} unanswered question(s) will be ignored.")).dim()
                )?;
            } else {
                writeln!(out, "  {}", style("New conversation.").bold())?;
            }
        }
        ChatCommand::History => {
            write!(out, "{}", renderer.render_history(&controller.conversation()))?;
        }
        ChatCommand::Status => {
            writeln!(out, "{}", status_line(&controller.conversation()))?;
        }
        ChatCommand::Suggest(None) => {
            writeln!(out, "\n  {}", style("Try asking:").bold())?;
            for (index, suggestion) in SUGGESTED_QUESTIONS.iter().enumerate() {
                writeln!(
                    out,
                    "  {} {} {}  {}",
                    style(format!("{}.", index + 1)).cyan(),
                    suggestion.icon,
                    suggestion.question,
                    style(suggestion.category).dim()
                )?;
            }
            writeln!(out, "  {}", style("Ask one with /suggest <n>").dim())?;
        }
        ChatCommand::Suggest(Some(number)) => match suggested_question(number) {
            Some(suggestion) => {
                writeln!(
                    out,
                    "  {} {}",
                    style("You >").green().bold(),
                    suggestion.question
                )?;
                let outcome = controller.submit_suggested(suggestion.question);
                report_submission(outcome, out)?;
            }
            None => writeln!(
                out,
                "  {} No suggested question #{number} (1-{})",
                style("!").yellow().bold(),
                SUGGESTED_QUESTIONS.len()
            )?,
        },
        ChatCommand::Rights(None) => write!(out, "{}", render_overview())?,
        ChatCommand::Rights(Some(query)) => match find_right(&query) {
            Some(right) => write!(out, "{}", render_right(right))?,
            None => writeln!(
                out,
                "  {} No fundamental right matches '{query}'",
                style("!").yellow().bold()
            )?,
        },
        ChatCommand::Unknown(cmd) => writeln!(
            out,
            "  {} Unknown command: {cmd}. Type /help for available commands.",
            style("?").yellow().bold()
        )?,
    }

    Ok(Flow::Continue)
}

fn report_submission(outcome: SubmitOutcome, out: &mut SharedWriter) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Accepted(id) => {
            debug!(exchange_id = %id, "Question accepted");
            writeln!(
                out,
                "  {} {}",
                style(format!("[{}]", id.short())).dim(),
                style("asking...").dim()
            )?;
        }
        SubmitOutcome::Empty => {}
        SubmitOutcome::Busy => writeln!(
            out,
            "  {} Still waiting for the previous answer.",
            style("!").yellow().bold()
        )?,
    }
    Ok(())
}

fn print_resolution(
    resolution: &Resolution,
    controller: &ConversationController<HttpAnswerClient>,
    renderer: &ChatRenderer,
    out: &mut SharedWriter,
) -> anyhow::Result<()> {
    // Completions for a conversation that was reset are not shown.
    let Resolution::Applied { id, .. } = resolution else {
        return Ok(());
    };
    let conversation = controller.conversation();
    if let Some(exchange) = conversation.get(id) {
        write!(out, "{}", renderer.render_answer(exchange))?;
        writeln!(out)?;
    }
    Ok(())
}
