//! Exchange and conversation types for LawGPT.
//!
//! An `Exchange` pairs one user question with its (possibly pending) answer.
//! A `Conversation` is the ordered history of exchanges for the current
//! session. Conversations are persistent values: every update returns a new
//! `Conversation`, so a snapshot handed to a renderer never changes under it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an exchange (UUID v7, time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeId(pub Uuid);

impl ExchangeId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// First eight characters, for compact display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExchangeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Status of an exchange.
///
/// `Pending` is the only non-terminal state. An exchange moves to
/// `Answered` or `Failed` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    Pending,
    Answered,
    Failed,
}

impl ExchangeStatus {
    /// Whether this status is final.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExchangeStatus::Pending)
    }
}

impl fmt::Display for ExchangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeStatus::Pending => write!(f, "pending"),
            ExchangeStatus::Answered => write!(f, "answered"),
            ExchangeStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for ExchangeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ExchangeStatus::Pending),
            "answered" => Ok(ExchangeStatus::Answered),
            "failed" => Ok(ExchangeStatus::Failed),
            other => Err(format!("invalid exchange status: '{other}'")),
        }
    }
}

/// How a pending exchange was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The answer API returned this text.
    Answered(String),
    /// The call failed; carries the user-facing fallback message.
    Failed(String),
}

impl ExchangeOutcome {
    /// The status this outcome moves an exchange into.
    pub fn status(&self) -> ExchangeStatus {
        match self {
            ExchangeOutcome::Answered(_) => ExchangeStatus::Answered,
            ExchangeOutcome::Failed(_) => ExchangeStatus::Failed,
        }
    }
}

/// One user question paired with its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: ExchangeId,
    pub question: String,
    /// `None` while pending.
    pub answer: Option<String>,
    pub status: ExchangeStatus,
    pub asked_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Exchange {
    /// Create a new pending exchange with a fresh id.
    pub fn pending(question: impl Into<String>) -> Self {
        Self {
            id: ExchangeId::new(),
            question: question.into(),
            answer: None,
            status: ExchangeStatus::Pending,
            asked_at: Utc::now(),
            resolved_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ExchangeStatus::Pending
    }

    /// A copy of this exchange with the outcome applied. Id, question and
    /// `asked_at` are carried over untouched.
    fn with_outcome(&self, outcome: ExchangeOutcome) -> Self {
        let status = outcome.status();
        let answer = match outcome {
            ExchangeOutcome::Answered(text) | ExchangeOutcome::Failed(text) => text,
        };
        Self {
            id: self.id,
            question: self.question.clone(),
            answer: Some(answer),
            status,
            asked_at: self.asked_at,
            resolved_at: Some(Utc::now()),
        }
    }
}

/// Ordered history of exchanges. Insertion order is chronological order.
///
/// Cloning is cheap (the sequence is shared behind an `Arc`). Updates never
/// touch the shared sequence; they build and return a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    exchanges: Arc<Vec<Exchange>>,
}

impl Conversation {
    /// An empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exchange> {
        self.exchanges.iter()
    }

    /// Look up an exchange by id.
    pub fn get(&self, id: &ExchangeId) -> Option<&Exchange> {
        self.exchanges.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ExchangeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of exchanges still awaiting an answer.
    pub fn pending_count(&self) -> usize {
        self.exchanges.iter().filter(|e| e.is_pending()).count()
    }

    pub fn has_pending(&self) -> bool {
        self.exchanges.iter().any(Exchange::is_pending)
    }

    /// A new conversation with `exchange` appended at the end.
    pub fn appended(&self, exchange: Exchange) -> Self {
        let mut exchanges = Vec::with_capacity(self.exchanges.len() + 1);
        exchanges.extend(self.exchanges.iter().cloned());
        exchanges.push(exchange);
        Self {
            exchanges: Arc::new(exchanges),
        }
    }

    /// A new conversation with the exchange `id` resolved.
    ///
    /// Returns `None` when no exchange has that id, or when it has already
    /// reached a terminal status. Positions of all exchanges are preserved.
    pub fn resolved(&self, id: &ExchangeId, outcome: ExchangeOutcome) -> Option<Self> {
        let index = self.exchanges.iter().position(|e| &e.id == id)?;
        if self.exchanges[index].status.is_terminal() {
            return None;
        }

        let mut exchanges: Vec<Exchange> = self.exchanges.as_ref().clone();
        exchanges[index] = self.exchanges[index].with_outcome(outcome);
        Some(Self {
            exchanges: Arc::new(exchanges),
        })
    }

    /// Whether two snapshots share the same underlying sequence.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.exchanges, &other.exchanges)
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Exchange;
    type IntoIter = std::slice::Iter<'a, Exchange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_status_roundtrip() {
        for status in [
            ExchangeStatus::Pending,
            ExchangeStatus::Answered,
            ExchangeStatus::Failed,
        ] {
            let parsed: ExchangeStatus = status.to_string().parse().unwrap();
            assert_eq!(status, parsed);
        }
        assert!("unknown".parse::<ExchangeStatus>().is_err());
    }

    #[test]
    fn test_exchange_status_serde() {
        let json = serde_json::to_string(&ExchangeStatus::Answered).unwrap();
        assert_eq!(json, "\"answered\"");
    }

    #[test]
    fn test_exchange_ids_are_distinct() {
        let a = ExchangeId::new();
        let b = ExchangeId::new();
        assert_ne!(a, b);
        assert_eq!(a.short().len(), 8);
        let parsed: ExchangeId = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }

    #[test]
    fn test_pending_exchange_has_no_answer() {
        let exchange = Exchange::pending("What is Article 21?");
        assert_eq!(exchange.status, ExchangeStatus::Pending);
        assert!(exchange.answer.is_none());
        assert!(exchange.resolved_at.is_none());
    }

    #[test]
    fn test_appended_leaves_original_untouched() {
        let empty = Conversation::new();
        let one = empty.appended(Exchange::pending("Q1"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert!(!empty.ptr_eq(&one));
    }

    #[test]
    fn test_resolved_by_id_preserves_order_and_identity() {
        let first = Exchange::pending("Q1");
        let second = Exchange::pending("Q2");
        let (id1, id2) = (first.id, second.id);
        let convo = Conversation::new().appended(first).appended(second);

        let after = convo
            .resolved(&id2, ExchangeOutcome::Answered("A2".to_string()))
            .unwrap();

        assert_eq!(after.exchanges()[0].id, id1);
        assert_eq!(after.exchanges()[1].id, id2);
        assert_eq!(after.exchanges()[1].question, "Q2");
        assert_eq!(after.exchanges()[1].answer.as_deref(), Some("A2"));
        assert_eq!(after.exchanges()[1].status, ExchangeStatus::Answered);
        assert!(after.exchanges()[1].resolved_at.is_some());
        assert!(after.exchanges()[0].is_pending());

        // The earlier snapshot still shows Q2 as pending.
        assert!(convo.get(&id2).unwrap().is_pending());
    }

    #[test]
    fn test_resolved_is_once_only() {
        let exchange = Exchange::pending("Q");
        let id = exchange.id;
        let convo = Conversation::new().appended(exchange);

        let failed = convo
            .resolved(&id, ExchangeOutcome::Failed("fallback".to_string()))
            .unwrap();
        assert_eq!(failed.get(&id).unwrap().status, ExchangeStatus::Failed);

        assert!(failed
            .resolved(&id, ExchangeOutcome::Answered("late".to_string()))
            .is_none());
    }

    #[test]
    fn test_resolved_unknown_id_is_none() {
        let convo = Conversation::new().appended(Exchange::pending("Q"));
        assert!(convo
            .resolved(&ExchangeId::new(), ExchangeOutcome::Answered("A".to_string()))
            .is_none());
    }

    #[test]
    fn test_pending_count() {
        let a = Exchange::pending("A");
        let id = a.id;
        let convo = Conversation::new()
            .appended(a)
            .appended(Exchange::pending("B"));
        assert_eq!(convo.pending_count(), 2);

        let convo = convo
            .resolved(&id, ExchangeOutcome::Answered("x".to_string()))
            .unwrap();
        assert_eq!(convo.pending_count(), 1);
        assert!(convo.has_pending());
    }

    #[test]
    fn test_conversation_serializes_as_array() {
        let convo = Conversation::new().appended(Exchange::pending("Q"));
        let json = serde_json::to_value(&convo).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["status"], "pending");
        assert!(json[0]["answer"].is_null());
    }
}
