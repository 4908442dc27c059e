//! HttpAnswerClient -- concrete [`AnswerClient`] over HTTP.
//!
//! Sends `POST {endpoint}` with a JSON body `{"question": "..."}` and expects
//! a JSON object with a string `answer` field back. Every other outcome maps
//! to an [`AskError`]; nothing is retried.

use std::time::Instant;

use lawgpt_core::answer::AnswerClient;
use lawgpt_types::ask::{AskRequest, AskResponse};
use lawgpt_types::config::ClientConfig;
use lawgpt_types::error::{AskError, ConfigError};

/// Answer API client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpAnswerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerClient {
    /// Build a client for the configured endpoint.
    ///
    /// The config is validated first; a configured request timeout becomes
    /// the overall timeout of each call.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(err: reqwest::Error) -> AskError {
        if err.is_timeout() {
            AskError::Timeout
        } else {
            AskError::Transport(err.to_string())
        }
    }
}

impl AnswerClient for HttpAnswerClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AskError> {
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Answer API returned an error status");
            return Err(AskError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::transport_error)?;
        let parsed: AskResponse = serde_json::from_str(&body)
            .map_err(|e| AskError::MalformedResponse(e.to_string()))?;

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            answer_len = parsed.answer.len(),
            "Answer received"
        );
        Ok(parsed)
    }
}
