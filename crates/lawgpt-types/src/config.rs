//! Client configuration types for LawGPT.
//!
//! `ClientConfig` represents the `config.toml` that controls where questions
//! are sent and how the conversation controller treats overlapping
//! submissions.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Endpoint of the answer API when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8800/api/ask";

/// Text shown in place of an answer when the outbound call fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't get a response. Please check if the backend server is running.";

/// What `submit` does while another exchange is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Allow overlapping calls; each resolves its own exchange by id.
    #[default]
    Concurrent,
    /// Reject new submissions until the pending exchange resolves.
    SingleFlight,
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitPolicy::Concurrent => write!(f, "concurrent"),
            SubmitPolicy::SingleFlight => write!(f, "single_flight"),
        }
    }
}

/// Top-level configuration for the LawGPT client.
///
/// Loaded from `~/.lawgpt/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL questions are POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Upper bound on a single outbound call. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub submit_policy: SubmitPolicy,

    /// Answer text recorded on failed exchanges.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
            submit_policy: SubmitPolicy::default(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Check the values a file or flag could have set badly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_scheme = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        let has_host = endpoint
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
