//! Business logic for the jobcoach client.
//!
//! Contains the [`api::CoachApi`] trait (the seam between the controller and
//! the HTTP implementation in jobcoach-client) and the session controller
//! that owns all client-side chat state.

pub mod api;
pub mod session;
