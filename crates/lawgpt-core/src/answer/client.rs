//! AnswerClient trait definition.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition). The returned
//! future must be `Send` because the conversation controller runs every
//! call on its own spawned task.

use lawgpt_types::ask::{AskRequest, AskResponse};
use lawgpt_types::error::AskError;

/// Sends one question to the answer API and returns its answer.
///
/// One call is one outbound request: implementations must not retry.
pub trait AnswerClient: Send + Sync {
    /// Short name for logs (e.g., "http").
    fn name(&self) -> &str;

    /// Ask a single question.
    fn ask(
        &self,
        request: &AskRequest,
    ) -> impl std::future::Future<Output = Result<AskResponse, AskError>> + Send;
}
