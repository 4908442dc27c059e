//! Client configuration loader for LawGPT.
//!
//! Reads `config.toml` from the data directory (`~/.lawgpt/` in production)
//! and deserializes it into [`ClientConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use lawgpt_types::config::ClientConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `LAWGPT_DATA_DIR` environment variable
/// 2. `~/.lawgpt`
/// 3. `.lawgpt` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LAWGPT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lawgpt");
    }

    PathBuf::from(".lawgpt")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`ClientConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
/// - Parsed but invalid values (bad endpoint, zero timeout): logs a warning
///   and returns the default.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    let config = match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
    };

    if let Err(err) = config.validate() {
        tracing::warn!("Invalid {}: {err}, using defaults", config_path.display());
        return ClientConfig::default();
    }

    config
}

/// Apply command-line/environment overrides on top of a loaded config.
///
/// Overrides are not validated here; the HTTP client validates the final
/// value when it is built.
pub fn apply_overrides(
    mut config: ClientConfig,
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
) -> ClientConfig {
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if request_timeout_secs.is_some() {
        config.request_timeout_secs = request_timeout_secs;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawgpt_types::config::{DEFAULT_ENDPOINT, SubmitPolicy};
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_client_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_client_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn load_client_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
endpoint = "http://10.0.0.5:8800/api/ask"
submit_policy = "single_flight"
"#,
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint, "http://10.0.0.5:8800/api/ask");
        assert_eq!(config.submit_policy, SubmitPolicy::SingleFlight);
        assert!(config.request_timeout_secs.is_none());
    }

    #[tokio::test]
    async fn load_client_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn load_client_config_invalid_values_return_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "endpoint = \"localhost:8800\"\n",
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn apply_overrides_replaces_only_given_values() {
        let base = ClientConfig {
            request_timeout_secs: Some(30),
            ..ClientConfig::default()
        };

        let unchanged = apply_overrides(base.clone(), None, None);
        assert_eq!(unchanged, base);

        let overridden = apply_overrides(base, Some("https://api.example.org/ask".to_string()), Some(5));
        assert_eq!(overridden.endpoint, "https://api.example.org/ask");
        assert_eq!(overridden.request_timeout_secs, Some(5));
    }
}
