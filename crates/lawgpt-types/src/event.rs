//! Event types for the conversation event bus.
//!
//! `ConversationEvent` is broadcast by the conversation controller whenever
//! the conversation changes, so renderers and loggers can react without
//! holding a reference to the controller.

use serde::{Deserialize, Serialize};

use crate::exchange::{ExchangeId, ExchangeStatus};

/// Events emitted by the conversation controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A question was accepted and appended as a pending exchange.
    ExchangeAppended { id: ExchangeId, question: String },

    /// A pending exchange reached a terminal status.
    ExchangeResolved { id: ExchangeId, status: ExchangeStatus },

    /// A completion arrived for an exchange that is no longer tracked
    /// (the conversation was reset while it was in flight).
    CompletionDiscarded { id: ExchangeId },

    /// The conversation and input buffer were cleared.
    ConversationReset { discarded_exchanges: usize },
}
