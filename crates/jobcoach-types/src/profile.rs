//! Candidate profile types.
//!
//! The profile is an AI-derived summary of the conversation so far. It is
//! wholly replaced on every successful message exchange or session creation,
//! never partially mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::collections::BTreeMap;

/// AI-generated candidate summary derived from the conversation.
///
/// All fields are optional or default-empty: the backend may return a
/// partially filled profile early in a conversation. The analysis maps
/// (`skills`, `experiences`, `preferences`) are backend-owned free-form JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub skills: BTreeMap<String, Value>,
    #[serde(default)]
    pub experiences: BTreeMap<String, Value>,
    #[serde(default)]
    pub preferences: BTreeMap<String, Value>,
    #[serde(default)]
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl CandidateProfile {
    /// Whether the profile has any displayable content at all.
    pub fn is_empty(&self) -> bool {
        self.headline.is_none()
            && self.summary.is_none()
            && self.strengths.is_empty()
            && self.improvements.is_empty()
            && self.skills.is_empty()
            && self.experiences.is_empty()
            && self.preferences.is_empty()
    }
}
