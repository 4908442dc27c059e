//! Observability setup for LawGPT: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
