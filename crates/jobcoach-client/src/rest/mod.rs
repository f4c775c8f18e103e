//! REST implementation of the `CoachApi` trait.
//!
//! `wire` holds the raw backend-owned JSON shapes and their normalization
//! into domain types; `client` holds the reqwest plumbing.

pub mod client;
pub mod wire;

pub use client::RestClient;
