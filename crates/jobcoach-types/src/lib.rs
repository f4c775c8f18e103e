//! Shared domain types for jobcoach.
//!
//! This crate contains the core domain types used across the jobcoach client:
//! chat messages, candidate profiles, job postings, match results, resume
//! sections, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod error;
pub mod job;
pub mod matching;
pub mod profile;
pub mod resume;
