//! The answer API port.
//!
//! `AnswerClient` is implemented by `lawgpt-infra` over HTTP and by
//! in-memory fakes in tests.

pub mod client;

pub use client::AnswerClient;
