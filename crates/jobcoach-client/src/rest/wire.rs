//! Raw wire shapes for the matching API, with tolerant normalization.
//!
//! The backend owns these JSON shapes and is loose about them: timestamps
//! may be naive or missing, `strengths` may arrive as a single string or a
//! list, analysis maps may be null or non-objects. Everything is normalized
//! here so domain types never see the slack.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use std::collections::BTreeMap;

use jobcoach_types::api::{JobPage, MatchPage, MessageExchange, SessionSnapshot};
use jobcoach_types::chat::{ChatMessage, MessageId, MessageRole, SessionId};
use jobcoach_types::job::JobPosting;
use jobcoach_types::matching::{JobMatch, MatchAnalysis, MatchId, ScoreBreakdown};
use jobcoach_types::profile::CandidateProfile;
use jobcoach_types::resume::ResumeId;

// --- Lenient field deserializers ---

/// Parse a timestamp that may be RFC 3339, a naive datetime, or a bare date.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn lenient_timestamp<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Accept a single string, a list of strings, or null.
fn string_or_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    match Option::<Raw>::deserialize(de)? {
        None => Ok(vec![]),
        Some(Raw::One(s)) => Ok(vec![s]),
        Some(Raw::Many(list)) => Ok(list),
    }
}

/// Accept a JSON object; anything else (null, array, scalar) becomes empty.
fn object_or_empty<'de, D>(de: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        Some(Value::Object(map)) => Ok(map.into_iter().collect()),
        _ => Ok(BTreeMap::new()),
    }
}

// --- Chat ---

#[derive(Debug, Deserialize)]
pub struct RawMessage {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    #[serde(default, deserialize_with = "lenient_timestamp", alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RawMessage {
    /// Missing timestamps default to now, matching the original client.
    pub fn into_message(self) -> ChatMessage {
        ChatMessage {
            id: MessageId::Remote(self.id),
            role: self.role,
            content: self.content,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub skills: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub experiences: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub preferences: BTreeMap<String, Value>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        alias = "lastGeneratedAt"
    )]
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl RawProfile {
    pub fn into_profile(self) -> CandidateProfile {
        CandidateProfile {
            headline: self.headline,
            summary: self.summary,
            strengths: self.strengths,
            improvements: self.improvements,
            skills: self.skills,
            experiences: self.experiences,
            preferences: self.preferences,
            last_generated_at: self.last_generated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawSessionResponse {
    pub session_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Vec<RawMessage>,
    #[serde(default)]
    pub profile: Option<RawProfile>,
}

impl RawSessionResponse {
    pub fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: SessionId(self.session_id),
            title: self.title,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            messages: self.messages.into_iter().map(RawMessage::into_message).collect(),
            profile: self.profile.map(RawProfile::into_profile),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawExchange {
    pub user_message: RawMessage,
    pub assistant_message: RawMessage,
    #[serde(default)]
    pub profile: Option<RawProfile>,
}

impl RawExchange {
    pub fn into_exchange(self) -> MessageExchange {
        MessageExchange {
            user_message: self.user_message.into_message(),
            assistant_message: self.assistant_message.into_message(),
            profile: self.profile.map(RawProfile::into_profile),
        }
    }
}

/// Envelope for `GET /api/chat/sessions/{id}/profile`.
#[derive(Debug, Deserialize)]
pub struct RawProfileEnvelope {
    #[serde(default)]
    pub profile: Option<RawProfile>,
}

// --- Matches ---

#[derive(Debug, Default, Deserialize)]
pub struct RawBreakdown {
    #[serde(default)]
    pub tech: f64,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub personality: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAnalysis {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub improvements: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMatch {
    pub match_id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub score_breakdown: RawBreakdown,
    #[serde(default)]
    pub analysis: RawAnalysis,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default, alias = "salary_text")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_applied: bool,
}

impl RawMatch {
    pub fn into_match(self) -> JobMatch {
        JobMatch {
            match_id: MatchId(self.match_id),
            job_id: self.job_id,
            company: self.company,
            title: self.title,
            position: self.position,
            location: self.location,
            match_score: self.match_score,
            score_breakdown: ScoreBreakdown {
                tech: self.score_breakdown.tech,
                experience: self.score_breakdown.experience,
                personality: self.score_breakdown.personality,
            },
            analysis: MatchAnalysis {
                summary: self.analysis.summary,
                strengths: self.analysis.strengths,
                improvements: self.analysis.improvements,
            },
            tech_stacks: self.tech_stacks,
            salary: self.salary,
            deadline: self.deadline,
            is_bookmarked: self.is_bookmarked,
            is_applied: self.is_applied,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawMatchPage {
    #[serde(default)]
    pub profile: Option<RawProfile>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

impl RawMatchPage {
    pub fn into_page(self) -> MatchPage {
        MatchPage {
            profile: self.profile.map(RawProfile::into_profile),
            total: self.total,
            matches: self.matches.into_iter().map(RawMatch::into_match).collect(),
        }
    }
}

// --- Jobs ---

#[derive(Debug, Deserialize)]
pub struct RawJob {
    pub id: i64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience_text: String,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub salary_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

impl RawJob {
    pub fn into_posting(self) -> JobPosting {
        JobPosting {
            id: self.id,
            company_name: self.company_name,
            title: self.title,
            position: self.position,
            location: self.location,
            experience_text: self.experience_text,
            tech_stacks: self.tech_stacks,
            salary_text: self.salary_text,
            deadline: self.deadline,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawJobPage {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub jobs: Vec<RawJob>,
}

impl RawJobPage {
    pub fn into_page(self) -> JobPage {
        JobPage {
            total: self.total,
            jobs: self.jobs.into_iter().map(RawJob::into_posting).collect(),
        }
    }
}

// --- Resume / match actions ---

#[derive(Debug, Deserialize)]
pub struct RawResumeCreated {
    pub id: i64,
}

impl RawResumeCreated {
    pub fn into_id(self) -> ResumeId {
        ResumeId(self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct RawBookmark {
    pub is_bookmarked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_naive_timestamp() {
        let raw: RawMessage = serde_json::from_str(
            r#"{"id": 3, "role": "assistant", "content": "hi", "created_at": "2024-06-01T10:30:00.123456"}"#,
        )
        .unwrap();
        let msg = raw.into_message();
        assert_eq!(msg.id, MessageId::Remote(3));
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.created_at.to_rfc3339(), "2024-06-01T10:30:00.123456+00:00");
    }

    #[test]
    fn test_message_missing_timestamp_defaults_to_now() {
        let raw: RawMessage =
            serde_json::from_str(r#"{"id": 1, "role": "user", "content": "hi"}"#).unwrap();
        let before = Utc::now();
        let msg = raw.into_message();
        assert!(msg.created_at >= before);
    }

    #[test]
    fn test_message_camel_case_timestamp_alias() {
        let raw: RawMessage = serde_json::from_str(
            r#"{"id": 1, "role": "user", "content": "hi", "createdAt": "2024-06-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(raw.created_at.is_some());
    }

    #[test]
    fn test_profile_strengths_single_string() {
        let raw: RawProfile =
            serde_json::from_str(r#"{"strengths": "clear communicator"}"#).unwrap();
        assert_eq!(raw.strengths, vec!["clear communicator".to_string()]);
    }

    #[test]
    fn test_profile_non_object_maps_become_empty() {
        let raw: RawProfile = serde_json::from_str(
            r#"{"skills": ["not", "an", "object"], "experiences": null, "preferences": 3}"#,
        )
        .unwrap();
        assert!(raw.skills.is_empty());
        assert!(raw.experiences.is_empty());
        assert!(raw.preferences.is_empty());
    }

    #[test]
    fn test_session_response_full() {
        let json = r#"{
            "session_id": 12,
            "title": "AI matching session",
            "created_at": "2024-06-01T09:00:00",
            "messages": [
                {"id": 1, "role": "system", "content": "You are a coach."},
                {"id": 2, "role": "assistant", "content": "Hello!"}
            ],
            "profile": null
        }"#;
        let snapshot: SessionSnapshot =
            serde_json::from_str::<RawSessionResponse>(json).unwrap().into_snapshot();
        assert_eq!(snapshot.session_id, SessionId(12));
        assert_eq!(snapshot.messages.len(), 2);
        assert!(snapshot.profile.is_none());
    }

    #[test]
    fn test_exchange_carries_profile() {
        let json = r#"{
            "user_message": {"id": 5, "role": "user", "content": "I write Rust"},
            "assistant_message": {"id": 6, "role": "assistant", "content": "Great!"},
            "profile": {"summary": "Rust developer", "strengths": ["Rust"]}
        }"#;
        let exchange = serde_json::from_str::<RawExchange>(json).unwrap().into_exchange();
        assert_eq!(exchange.user_message.id, MessageId::Remote(5));
        assert_eq!(
            exchange.profile.unwrap().summary.as_deref(),
            Some("Rust developer")
        );
    }

    #[test]
    fn test_match_with_salary_text_alias_and_date_deadline() {
        let json = r#"{
            "match_id": 1,
            "job_id": 2,
            "company": "Acme",
            "title": "Backend Engineer",
            "match_score": 0.82,
            "score_breakdown": {"tech": 0.9},
            "salary_text": "negotiable",
            "deadline": "2024-12-31"
        }"#;
        let m = serde_json::from_str::<RawMatch>(json).unwrap().into_match();
        assert_eq!(m.salary.as_deref(), Some("negotiable"));
        assert_eq!(m.score_breakdown.tech, 0.9);
        assert_eq!(m.score_breakdown.experience, 0.0);
        assert!(m.deadline.is_some());
    }

    #[test]
    fn test_match_page_defaults() {
        let page = serde_json::from_str::<RawMatchPage>("{}").unwrap().into_page();
        assert_eq!(page.total, 0);
        assert!(page.matches.is_empty());
        assert!(page.profile.is_none());
    }

    #[test]
    fn test_job_page() {
        let json = r#"{"total": 1, "jobs": [{"id": 9, "company_name": "Acme", "title": "SRE"}]}"#;
        let page = serde_json::from_str::<RawJobPage>(json).unwrap().into_page();
        assert_eq!(page.total, 1);
        assert_eq!(page.jobs[0].id, 9);
    }
}
