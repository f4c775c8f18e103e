//! Interactive chat experience for jobcoach.
//!
//! This module implements the full chat loop: session creation with an
//! optimistic composer, markdown rendering of coach replies, slash commands
//! for profile and match views, and quick-action prompts carried over from
//! the original composer toolbar. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
