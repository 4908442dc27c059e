//! Infrastructure layer for LawGPT.
//!
//! Contains the implementation of the `AnswerClient` port defined in
//! `lawgpt-core` (an HTTP client for the answer API) and the loader for the
//! client's `config.toml`.

pub mod config;
pub mod http;
