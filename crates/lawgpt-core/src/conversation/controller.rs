//! Conversation controller.
//!
//! Owns the `Conversation` and the input buffer for one chat session.
//! `submit` appends a pending exchange and spawns one task that calls the
//! answer API; the task reports back over an mpsc channel keyed by
//! `ExchangeId`. The owner drives delivery with `next_resolution`,
//! `try_resolve` or `settle`, so every mutation happens on the owner's task.
//!
//! `reset` clears the conversation and forgets every in-flight key. It does
//! not abort the outbound calls; their completions still arrive and are
//! discarded because their key is gone.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};

use lawgpt_types::ask::{AskRequest, AskResponse};
use lawgpt_types::config::{ClientConfig, DEFAULT_FALLBACK_MESSAGE, SubmitPolicy};
use lawgpt_types::error::AskError;
use lawgpt_types::event::ConversationEvent;
use lawgpt_types::exchange::{Conversation, Exchange, ExchangeId, ExchangeOutcome, ExchangeStatus};

use crate::answer::AnswerClient;
use crate::event::EventBus;

/// Result of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A pending exchange was appended and its request spawned.
    Accepted(ExchangeId),
    /// The text was empty after trimming; nothing changed.
    Empty,
    /// Single-flight policy and an exchange is still pending; nothing changed.
    Busy,
}

impl SubmitOutcome {
    pub fn accepted(&self) -> Option<ExchangeId> {
        match self {
            SubmitOutcome::Accepted(id) => Some(*id),
            _ => None,
        }
    }
}

/// What happened to one delivered completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The exchange moved to a terminal status.
    Applied { id: ExchangeId, status: ExchangeStatus },
    /// The exchange is no longer tracked; the result was dropped.
    Discarded { id: ExchangeId },
}

impl Resolution {
    pub fn id(&self) -> ExchangeId {
        match self {
            Resolution::Applied { id, .. } | Resolution::Discarded { id } => *id,
        }
    }
}

/// Message sent from a request task back to the controller.
struct Completion {
    id: ExchangeId,
    result: Result<AskResponse, AskError>,
}

/// Drives one chat session against an [`AnswerClient`].
///
/// Must be used from within a tokio runtime: `submit` spawns tasks.
pub struct ConversationController<C: AnswerClient + 'static> {
    client: Arc<C>,
    conversation: Conversation,
    input: String,
    policy: SubmitPolicy,
    fallback_message: String,
    /// Exchanges whose completion is still wanted.
    in_flight: HashSet<ExchangeId>,
    /// Spawned tasks whose completion has not been received yet. Survives
    /// `reset`, unlike `in_flight`.
    outstanding: usize,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    shutdown: CancellationToken,
    events: EventBus,
}

impl<C: AnswerClient + 'static> ConversationController<C> {
    /// Create a controller with the default (concurrent) policy and the
    /// standard fallback message.
    pub fn new(client: C) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    /// Create a controller over a client that is shared with other callers.
    pub fn with_shared_client(client: Arc<C>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            client,
            conversation: Conversation::new(),
            input: String::new(),
            policy: SubmitPolicy::default(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            in_flight: HashSet::new(),
            outstanding: 0,
            completion_tx,
            completion_rx,
            shutdown: CancellationToken::new(),
            events: EventBus::default(),
        }
    }

    /// Create a controller configured from a [`ClientConfig`].
    pub fn from_config(client: C, config: &ClientConfig) -> Self {
        Self::new(client)
            .with_policy(config.submit_policy)
            .with_fallback_message(config.fallback_message.clone())
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // --- Input buffer ---

    /// Text typed but not yet submitted.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // --- Observation ---

    /// Snapshot of the conversation. Later updates never alter it.
    pub fn conversation(&self) -> Conversation {
        self.conversation.clone()
    }

    /// Whether any exchange of the current conversation awaits its answer.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Whether any spawned request has not reported back yet, including
    /// requests abandoned by `reset`.
    pub fn has_outstanding(&self) -> bool {
        self.outstanding > 0
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    // --- Submission ---

    /// Submit the contents of the input buffer.
    pub fn submit(&mut self) -> SubmitOutcome {
        let text = self.input.clone();
        self.submit_text(&text)
    }

    /// Submit a suggested question. Same path and invariants as `submit`,
    /// including clearing the input buffer on acceptance.
    pub fn submit_suggested(&mut self, question: &str) -> SubmitOutcome {
        self.submit_text(question)
    }

    fn submit_text(&mut self, text: &str) -> SubmitOutcome {
        let question = text.trim();
        if question.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.policy == SubmitPolicy::SingleFlight && self.conversation.has_pending() {
            debug!("Submission rejected: an exchange is still pending");
            return SubmitOutcome::Busy;
        }

        let exchange = Exchange::pending(question);
        let id = exchange.id;
        self.conversation = self.conversation.appended(exchange);
        self.input.clear();
        self.in_flight.insert(id);
        self.events.publish(ConversationEvent::ExchangeAppended {
            id,
            question: question.to_string(),
        });

        self.spawn_request(id, AskRequest::new(question));
        info!(exchange_id = %id, in_flight = self.in_flight.len(), "Question submitted");
        SubmitOutcome::Accepted(id)
    }

    fn spawn_request(&mut self, id: ExchangeId, request: AskRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.completion_tx.clone();
        let shutdown = self.shutdown.clone();
        let span = info_span!("ask", exchange_id = %id, client = client.name());

        self.outstanding += 1;
        tokio::spawn(
            async move {
                let result = tokio::select! {
                    _ = shutdown.cancelled() => {
                        debug!("Request task cancelled by shutdown");
                        return;
                    }
                    result = client.ask(&request) => result,
                };
                // The receiver lives as long as the controller.
                let _ = tx.send(Completion { id, result });
            }
            .instrument(span),
        );
    }

    // --- Reset ---

    /// Clear the conversation and the input buffer.
    ///
    /// In-flight requests keep running; their completions are discarded.
    pub fn reset(&mut self) {
        let discarded = self.conversation.len();
        let abandoned = self.in_flight.len();
        self.conversation = Conversation::new();
        self.input.clear();
        self.in_flight.clear();
        self.events.publish(ConversationEvent::ConversationReset {
            discarded_exchanges: discarded,
        });
        info!(discarded, abandoned, "Conversation reset");
    }

    // --- Completion delivery ---

    /// Wait for the next completion and apply it.
    ///
    /// Returns `None` immediately when no request is outstanding or the
    /// controller has been shut down.
    pub async fn next_resolution(&mut self) -> Option<Resolution> {
        if self.outstanding == 0 || self.shutdown.is_cancelled() {
            return None;
        }
        let completion = self.completion_rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Apply every completion that has already arrived, without waiting.
    pub fn try_resolve(&mut self) -> Vec<Resolution> {
        let mut resolutions = Vec::new();
        while let Ok(completion) = self.completion_rx.try_recv() {
            resolutions.push(self.apply(completion));
        }
        resolutions
    }

    /// Wait until every outstanding request has reported back.
    pub async fn settle(&mut self) -> Vec<Resolution> {
        let mut resolutions = Vec::new();
        while let Some(resolution) = self.next_resolution().await {
            resolutions.push(resolution);
        }
        resolutions
    }

    fn apply(&mut self, completion: Completion) -> Resolution {
        let Completion { id, result } = completion;
        self.outstanding = self.outstanding.saturating_sub(1);

        if !self.in_flight.remove(&id) {
            debug!(exchange_id = %id, "Completion for untracked exchange discarded");
            self.events
                .publish(ConversationEvent::CompletionDiscarded { id });
            return Resolution::Discarded { id };
        }

        let outcome = match result {
            Ok(response) => ExchangeOutcome::Answered(response.answer),
            Err(err) => {
                warn!(exchange_id = %id, error = %err, "Answer request failed");
                ExchangeOutcome::Failed(self.fallback_message.clone())
            }
        };
        let status = outcome.status();

        match self.conversation.resolved(&id, outcome) {
            Some(next) => {
                self.conversation = next;
                self.events
                    .publish(ConversationEvent::ExchangeResolved { id, status });
                info!(exchange_id = %id, %status, "Exchange resolved");
                Resolution::Applied { id, status }
            }
            None => {
                // Tracked keys always name a pending exchange; keep going if not.
                warn!(exchange_id = %id, "Tracked exchange missing or already resolved");
                Resolution::Discarded { id }
            }
        }
    }

    // --- Shutdown ---

    /// Cancel every spawned request task. For process exit; after this the
    /// controller delivers no further completions.
    pub fn shutdown(&mut self) {
        self.shutdown.cancel();
    }
}

impl<C: AnswerClient + 'static> Drop for ConversationController<C> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    type Reply = Result<AskResponse, AskError>;

    /// Client whose replies are released by the test through oneshot senders.
    #[derive(Default)]
    struct ScriptedClient {
        replies: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn expect(&self, question: &str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.replies
                .lock()
                .unwrap()
                .insert(question.to_string(), rx);
            tx
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AnswerClient for ScriptedClient {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn ask(&self, request: &AskRequest) -> Reply {
            self.calls.lock().unwrap().push(request.question.clone());
            let rx = self.replies.lock().unwrap().remove(&request.question);
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(AskError::Transport("reply dropped".to_string()))),
                None => Err(AskError::Transport("unexpected question".to_string())),
            }
        }
    }

    fn answer(text: &str) -> Reply {
        Ok(AskResponse {
            answer: text.to_string(),
        })
    }

    fn controller() -> (ConversationController<ScriptedClient>, Arc<ScriptedClient>) {
        let client = Arc::new(ScriptedClient::default());
        (
            ConversationController::with_shared_client(Arc::clone(&client)),
            client,
        )
    }

    #[tokio::test]
    async fn submit_appends_pending_and_clears_input() {
        let (mut ctrl, client) = controller();
        let _reply = client.expect("What is Article 21?");

        ctrl.set_input("What is Article 21?");
        let outcome = ctrl.submit();

        let id = outcome.accepted().unwrap();
        let convo = ctrl.conversation();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.exchanges()[0].id, id);
        assert_eq!(convo.exchanges()[0].status, ExchangeStatus::Pending);
        assert!(convo.exchanges()[0].answer.is_none());
        assert_eq!(ctrl.input(), "");
        assert!(ctrl.is_loading());
    }

    #[tokio::test]
    async fn successful_answer_is_applied() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("What is Article 21?");

        ctrl.set_input("What is Article 21?");
        let id = ctrl.submit().accepted().unwrap();
        reply.send(answer("Right to life...")).unwrap();

        let resolution = ctrl.next_resolution().await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Applied {
                id,
                status: ExchangeStatus::Answered
            }
        );
        let exchange = ctrl.conversation().get(&id).cloned().unwrap();
        assert_eq!(exchange.status, ExchangeStatus::Answered);
        assert_eq!(exchange.answer.as_deref(), Some("Right to life..."));
        assert!(!ctrl.is_loading());
        assert_eq!(client.calls(), vec!["What is Article 21?".to_string()]);
    }

    #[tokio::test]
    async fn server_error_becomes_failed_with_fallback() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("X");

        let id = ctrl.submit_suggested("X").accepted().unwrap();
        reply.send(Err(AskError::Status { code: 500 })).unwrap();
        ctrl.settle().await;

        let exchange = ctrl.conversation().get(&id).cloned().unwrap();
        assert_eq!(exchange.status, ExchangeStatus::Failed);
        assert_eq!(exchange.answer.as_deref(), Some(DEFAULT_FALLBACK_MESSAGE));
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn malformed_response_is_failed() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q");

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        reply
            .send(Err(AskError::MalformedResponse("missing field `answer`".to_string())))
            .unwrap();
        ctrl.settle().await;

        assert_eq!(
            ctrl.conversation().get(&id).unwrap().status,
            ExchangeStatus::Failed
        );
    }

    #[tokio::test]
    async fn custom_fallback_message_is_used() {
        let client = ScriptedClient::default();
        let reply = client.expect("Q");
        let config = ClientConfig {
            fallback_message: "Backend unavailable.".to_string(),
            ..ClientConfig::default()
        };
        let mut ctrl = ConversationController::from_config(client, &config);

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        reply
            .send(Err(AskError::Transport("connection refused".to_string())))
            .unwrap();
        ctrl.settle().await;

        assert_eq!(
            ctrl.conversation().get(&id).unwrap().answer.as_deref(),
            Some("Backend unavailable.")
        );
    }

    #[tokio::test]
    async fn empty_or_whitespace_submit_is_noop() {
        let (mut ctrl, client) = controller();

        assert_eq!(ctrl.submit(), SubmitOutcome::Empty);
        assert!(ctrl.conversation().is_empty());

        ctrl.set_input("   \t\n");
        assert_eq!(ctrl.submit(), SubmitOutcome::Empty);
        assert_eq!(ctrl.input(), "   \t\n");
        assert!(ctrl.conversation().is_empty());

        assert_eq!(ctrl.submit_suggested(""), SubmitOutcome::Empty);
        assert!(ctrl.conversation().is_empty());
        assert!(!ctrl.has_outstanding());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn question_is_stored_trimmed() {
        let (mut ctrl, client) = controller();
        let _reply = client.expect("What is bail?");

        ctrl.set_input("  What is bail?  ");
        let id = ctrl.submit().accepted().unwrap();

        assert_eq!(ctrl.conversation().get(&id).unwrap().question, "What is bail?");
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q1");
        ctrl.submit_suggested("Q1");
        reply.send(answer("A1")).unwrap();
        ctrl.settle().await;

        ctrl.set_input("half-typed");
        ctrl.reset();

        assert!(ctrl.conversation().is_empty());
        assert_eq!(ctrl.input(), "");
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn late_completion_after_reset_is_discarded() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q1");

        let id = ctrl.submit_suggested("Q1").accepted().unwrap();
        ctrl.reset();
        assert!(!ctrl.is_loading());
        assert!(ctrl.has_outstanding());

        reply.send(answer("A1")).unwrap();
        let resolution = ctrl.next_resolution().await.unwrap();

        assert_eq!(resolution, Resolution::Discarded { id });
        assert!(ctrl.conversation().is_empty());
        assert!(!ctrl.has_outstanding());
    }

    #[tokio::test]
    async fn late_completion_does_not_touch_new_conversation() {
        let (mut ctrl, client) = controller();
        let old_reply = client.expect("Q1");
        let new_reply = client.expect("Q2");

        ctrl.submit_suggested("Q1");
        ctrl.reset();
        let new_id = ctrl.submit_suggested("Q2").accepted().unwrap();

        old_reply.send(answer("stale")).unwrap();
        let first = ctrl.next_resolution().await.unwrap();
        assert!(matches!(first, Resolution::Discarded { .. }));
        assert!(ctrl.conversation().get(&new_id).unwrap().is_pending());

        new_reply.send(answer("fresh")).unwrap();
        ctrl.settle().await;

        let convo = ctrl.conversation();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.exchanges()[0].answer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn overlapping_questions_resolve_by_id_in_any_order() {
        let (mut ctrl, client) = controller();
        let reply1 = client.expect("Q1");
        let reply2 = client.expect("Q2");

        ctrl.set_input("Q1");
        let id1 = ctrl.submit().accepted().unwrap();
        let id2 = ctrl.submit_suggested("Q2").accepted().unwrap();
        assert_ne!(id1, id2);
        assert_eq!(ctrl.conversation().pending_count(), 2);

        // Second question answers first.
        reply2.send(answer("A2")).unwrap();
        let first = ctrl.next_resolution().await.unwrap();
        assert_eq!(first.id(), id2);
        assert!(ctrl.is_loading());

        reply1.send(answer("A1")).unwrap();
        let second = ctrl.next_resolution().await.unwrap();
        assert_eq!(second.id(), id1);

        let convo = ctrl.conversation();
        assert_eq!(convo.exchanges()[0].id, id1);
        assert_eq!(convo.exchanges()[0].answer.as_deref(), Some("A1"));
        assert_eq!(convo.exchanges()[1].id, id2);
        assert_eq!(convo.exchanges()[1].answer.as_deref(), Some("A2"));
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn single_flight_rejects_while_pending() {
        let (ctrl, client) = controller();
        let mut ctrl = ctrl.with_policy(SubmitPolicy::SingleFlight);
        let reply = client.expect("Q1");
        let _reply2 = client.expect("Q2");

        ctrl.submit_suggested("Q1");
        ctrl.set_input("Q2");
        assert_eq!(ctrl.submit(), SubmitOutcome::Busy);
        assert_eq!(ctrl.input(), "Q2");
        assert_eq!(ctrl.conversation().len(), 1);

        reply.send(answer("A1")).unwrap();
        ctrl.settle().await;

        assert!(ctrl.submit().accepted().is_some());
        assert_eq!(ctrl.conversation().len(), 2);
    }

    #[tokio::test]
    async fn snapshots_are_not_mutated_by_later_updates() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q");

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        let before = ctrl.conversation();
        reply.send(answer("A")).unwrap();
        ctrl.settle().await;

        assert!(before.get(&id).unwrap().is_pending());
        assert_eq!(
            ctrl.conversation().get(&id).unwrap().status,
            ExchangeStatus::Answered
        );
    }

    #[tokio::test]
    async fn identity_and_question_stable_across_resolution() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q");

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        let pending = ctrl.conversation().get(&id).cloned().unwrap();
        reply.send(answer("A")).unwrap();
        ctrl.settle().await;
        let done = ctrl.conversation().get(&id).cloned().unwrap();

        assert_eq!(pending.id, done.id);
        assert_eq!(pending.question, done.question);
        assert_eq!(pending.asked_at, done.asked_at);
    }

    #[tokio::test]
    async fn events_are_published_in_order() {
        let (mut ctrl, client) = controller();
        let mut events = ctrl.subscribe();
        let reply = client.expect("Q");

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        reply.send(answer("A")).unwrap();
        ctrl.settle().await;
        ctrl.reset();

        assert_eq!(
            events.recv().await.unwrap(),
            ConversationEvent::ExchangeAppended {
                id,
                question: "Q".to_string()
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            ConversationEvent::ExchangeResolved {
                id,
                status: ExchangeStatus::Answered
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            ConversationEvent::ConversationReset {
                discarded_exchanges: 1
            }
        );
    }

    #[tokio::test]
    async fn next_resolution_without_outstanding_returns_none() {
        let (mut ctrl, _client) = controller();
        assert!(ctrl.next_resolution().await.is_none());
        assert!(ctrl.try_resolve().is_empty());
    }

    #[tokio::test]
    async fn try_resolve_applies_ready_completions() {
        let (mut ctrl, client) = controller();
        let reply = client.expect("Q");

        let id = ctrl.submit_suggested("Q").accepted().unwrap();
        reply.send(answer("A")).unwrap();

        // Give the request task a chance to run and report back.
        let mut resolved = Vec::new();
        for _ in 0..50 {
            resolved.extend(ctrl.try_resolve());
            if !resolved.is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id(), id);
    }

    #[tokio::test]
    async fn shutdown_stops_delivery() {
        let (mut ctrl, client) = controller();
        let _reply = client.expect("Q");

        ctrl.submit_suggested("Q");
        ctrl.shutdown();

        assert!(ctrl.next_resolution().await.is_none());
    }
}
