//! Conversation logic and port definitions for LawGPT.
//!
//! This crate defines the `AnswerClient` port that the infrastructure layer
//! implements, and the `ConversationController` that drives a chat session
//! on top of it. It depends only on `lawgpt-types` -- never on
//! `lawgpt-infra` or any HTTP/IO crate.

pub mod answer;
pub mod conversation;
pub mod event;
