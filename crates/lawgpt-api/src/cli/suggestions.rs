//! `lawgpt suggestions` -- starter questions.

use console::style;

use lawgpt_types::suggestion::SUGGESTED_QUESTIONS;

pub fn show_suggestions(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(SUGGESTED_QUESTIONS)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Try asking:").bold());
    println!();
    for (index, suggestion) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!(
            "  {} {} {}",
            style(format!("{}.", index + 1)).cyan(),
            suggestion.icon,
            suggestion.question
        );
        println!("     {}", style(suggestion.category).dim());
    }
    println!();
    println!(
        "  {}",
        style("In chat, /suggest <n> asks one of these.").dim()
    );
    println!();
    Ok(())
}
