//! Shared domain types for LawGPT.
//!
//! This crate contains the core domain types used across the LawGPT client:
//! Exchange, Conversation, the answer API contract, conversation events,
//! client configuration, and the static rights catalogue.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod ask;
pub mod config;
pub mod error;
pub mod event;
pub mod exchange;
pub mod rights;
pub mod suggestion;
