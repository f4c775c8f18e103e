//! Client-side chat session state.
//!
//! The controller owns the message list, the derived profile, and the match
//! cache, and mediates every mutation through the [`crate::api::CoachApi`]
//! trait. Entry point: [`controller::SessionController`].

pub mod cache;
pub mod controller;
