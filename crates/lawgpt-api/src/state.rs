//! Application state shared by the CLI commands.
//!
//! Resolves the data directory, loads `config.toml`, applies command-line
//! overrides, and builds the HTTP answer client.

use std::path::PathBuf;

use lawgpt_infra::config::{apply_overrides, load_client_config, resolve_data_dir};
use lawgpt_infra::http::HttpAnswerClient;
use lawgpt_types::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: ClientConfig,
    pub client: HttpAnswerClient,
}

impl AppState {
    /// Load configuration and wire the answer client.
    pub async fn init(endpoint: Option<String>, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_client_config(&data_dir).await;
        let config = apply_overrides(config, endpoint, timeout_secs);
        let client = HttpAnswerClient::from_config(&config)?;

        tracing::debug!(
            endpoint = %config.endpoint,
            policy = %config.submit_policy,
            data_dir = %data_dir.display(),
            "Application state initialized"
        );

        Ok(Self {
            data_dir,
            config,
            client,
        })
    }
}
