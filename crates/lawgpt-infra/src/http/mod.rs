//! HTTP adapter for the answer API.

pub mod client;

pub use client::HttpAnswerClient;
