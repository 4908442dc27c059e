//! Interactive CLI chat experience for LawGPT.
//!
//! Questions are submitted without blocking the prompt; answers are printed
//! as they arrive, in whatever order the backend finishes them. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
