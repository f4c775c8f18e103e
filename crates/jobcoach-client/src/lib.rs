//! Infrastructure for jobcoach: the reqwest-backed [`rest::RestClient`]
//! implementing `CoachApi`, and configuration loading.

pub mod config;
pub mod rest;
