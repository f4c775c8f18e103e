//! Response bundles returned by the remote matching API.
//!
//! These are the normalized shapes the session controller consumes. The raw
//! wire format (backend-owned JSON) is deserialized and normalized in the
//! client crate; by the time data reaches these types, timestamps are filled
//! in and list fields are always present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, SessionId};
use crate::job::JobPosting;
use crate::matching::JobMatch;
use crate::profile::CandidateProfile;

/// Everything the server returns when a session is created.
///
/// `messages` includes the system prompt; the controller filters it out
/// before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
    pub profile: Option<CandidateProfile>,
}

/// The server's response to a posted user message.
///
/// Contains the persisted user message (with its server-assigned id), the
/// assistant's reply, and the regenerated profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    pub profile: Option<CandidateProfile>,
}

/// A page of job matches for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPage {
    pub profile: Option<CandidateProfile>,
    pub total: usize,
    pub matches: Vec<JobMatch>,
}

/// A page of job postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPage {
    pub total: usize,
    pub jobs: Vec<JobPosting>,
}
