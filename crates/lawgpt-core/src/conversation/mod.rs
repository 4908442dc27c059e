//! Conversation state machine.
//!
//! `ConversationController` owns the conversation for one chat session and
//! mediates between submitted questions and an `AnswerClient`.

pub mod controller;

pub use controller::{ConversationController, Resolution, SubmitOutcome};
