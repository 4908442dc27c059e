//! Wire types for the answer API.
//!
//! `POST {endpoint}` with `{"question": "..."}`; a successful response is a
//! JSON object carrying at least a string `answer` field. Extra fields are
//! ignored.

use serde::{Deserialize, Serialize};

/// Request body sent to the answer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Successful response body from the answer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
