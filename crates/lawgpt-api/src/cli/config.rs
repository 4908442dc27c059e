//! `lawgpt config` -- show the effective client configuration.

use console::style;

use lawgpt_infra::config::CONFIG_FILE_NAME;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let config_path = state.data_dir.join(CONFIG_FILE_NAME);

    if json {
        let value = serde_json::json!({
            "config_file": config_path.display().to_string(),
            "config_file_exists": config_path.exists(),
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let timeout = state
        .config
        .request_timeout_secs
        .map(|secs| format!("{secs}s"))
        .unwrap_or_else(|| "none".to_string());
    let source = if config_path.exists() {
        style(config_path.display().to_string()).dim()
    } else {
        style(format!("{} (not found, using defaults)", config_path.display())).dim()
    };

    println!();
    println!("  {}", style("LawGPT configuration").bold());
    println!();
    println!("  {}      {}", style("File:").bold(), source);
    println!("  {}  {}", style("Endpoint:").bold(), state.config.endpoint);
    println!("  {}   {}", style("Timeout:").bold(), timeout);
    println!("  {}    {}", style("Policy:").bold(), state.config.submit_policy);
    println!("  {}  {}", style("Fallback:").bold(), style(&state.config.fallback_message).dim());
    println!();
    Ok(())
}
