//! RestClient -- concrete [`CoachApi`] implementation over reqwest.
//!
//! Every operation is a single-attempt request/response pair against the
//! matching API. Connection failures map to [`ApiError::Transport`], non-2xx
//! responses to [`ApiError::Status`] (404 to [`ApiError::NotFound`]), and
//! body parsing failures to [`ApiError::Decode`].

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use jobcoach_core::api::CoachApi;
use jobcoach_types::api::{JobPage, MatchPage, MessageExchange, SessionSnapshot};
use jobcoach_types::chat::{ChatMessage, SessionId};
use jobcoach_types::error::ApiError;
use jobcoach_types::job::JobQuery;
use jobcoach_types::matching::MatchId;
use jobcoach_types::profile::CandidateProfile;
use jobcoach_types::resume::{BasicInfo, CoverLetter, Project, ResumeId, WorkExperience};

use crate::config::ClientConfig;
use crate::rest::wire::{
    RawBookmark, RawExchange, RawJobPage, RawMatchPage, RawMessage, RawProfileEnvelope,
    RawResumeCreated, RawSessionResponse,
};

/// Resumes are created under this account until the backend grows real
/// authentication (the original client pins the same id).
const DEFAULT_USER_ID: i64 = 1;

/// HTTP client for the remote job-matching API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response to an error, or pass it through.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            404 => ApiError::NotFound,
            code => ApiError::Status { status: code, body },
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST where only the status matters; the body is discarded.
    async fn post_ok<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    /// PUT where only the status matters; the body is discarded.
    async fn put_ok<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        debug!(path, "PUT");
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }
}

impl CoachApi for RestClient {
    async fn create_session(&self) -> Result<SessionSnapshot, ApiError> {
        let raw: RawSessionResponse = self.post_json("/api/chat/sessions", &json!({})).await?;
        Ok(raw.into_snapshot())
    }

    async fn send_message(
        &self,
        session_id: SessionId,
        content: &str,
    ) -> Result<MessageExchange, ApiError> {
        let raw: RawExchange = self
            .post_json(
                &format!("/api/chat/sessions/{session_id}/messages"),
                &json!({ "content": content }),
            )
            .await?;
        Ok(raw.into_exchange())
    }

    async fn fetch_messages(&self, session_id: SessionId) -> Result<Vec<ChatMessage>, ApiError> {
        let raw: Vec<RawMessage> = self
            .get_json(&format!("/api/chat/sessions/{session_id}/messages"), &[])
            .await?;
        Ok(raw.into_iter().map(RawMessage::into_message).collect())
    }

    async fn fetch_profile(
        &self,
        session_id: SessionId,
    ) -> Result<Option<CandidateProfile>, ApiError> {
        let raw: RawProfileEnvelope = self
            .get_json(&format!("/api/chat/sessions/{session_id}/profile"), &[])
            .await?;
        Ok(raw.profile.map(|p| p.into_profile()))
    }

    async fn fetch_matches(
        &self,
        session_id: SessionId,
        refresh: bool,
        limit: u32,
    ) -> Result<MatchPage, ApiError> {
        let mut query = vec![("limit", limit.to_string())];
        if refresh {
            query.push(("refresh", "true".to_string()));
        }
        let raw: RawMatchPage = self
            .get_json(&format!("/api/chat/sessions/{session_id}/matches"), &query)
            .await?;
        Ok(raw.into_page())
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobPage, ApiError> {
        let mut params = vec![
            ("limit", query.limit.to_string()),
            ("skip", query.skip.to_string()),
        ];
        if let Some(position) = &query.position {
            params.push(("position", position.clone()));
        }
        if let Some(location) = &query.location {
            params.push(("location", location.clone()));
        }
        let raw: RawJobPage = self.get_json("/api/job-postings", &params).await?;
        Ok(raw.into_page())
    }

    async fn create_resume(&self) -> Result<ResumeId, ApiError> {
        let raw: RawResumeCreated = self
            .post_json(
                &format!("/api/resumes?user_id={DEFAULT_USER_ID}"),
                &json!({}),
            )
            .await?;
        Ok(raw.into_id())
    }

    async fn save_basic_info(&self, resume_id: ResumeId, info: &BasicInfo) -> Result<(), ApiError> {
        self.put_ok(&format!("/api/resumes/{resume_id}/basic-info"), info)
            .await
    }

    async fn save_cover_letter(
        &self,
        resume_id: ResumeId,
        letter: &CoverLetter,
    ) -> Result<(), ApiError> {
        self.put_ok(&format!("/api/resumes/{resume_id}/cover-letter"), letter)
            .await
    }

    async fn add_experience(
        &self,
        resume_id: ResumeId,
        experience: &WorkExperience,
    ) -> Result<(), ApiError> {
        self.post_ok(&format!("/api/resumes/{resume_id}/experiences"), experience)
            .await
    }

    async fn add_project(&self, resume_id: ResumeId, project: &Project) -> Result<(), ApiError> {
        self.post_ok(&format!("/api/resumes/{resume_id}/projects"), project)
            .await
    }

    async fn submit_resume(&self, resume_id: ResumeId) -> Result<(), ApiError> {
        self.post_ok(&format!("/api/resumes/{resume_id}/submit"), &json!({}))
            .await
    }

    async fn toggle_bookmark(&self, match_id: MatchId) -> Result<bool, ApiError> {
        let raw: RawBookmark = self
            .post_json(&format!("/api/matches/{match_id}/bookmark"), &json!({}))
            .await?;
        Ok(raw.is_bookmarked)
    }

    async fn apply_to_match(&self, match_id: MatchId) -> Result<(), ApiError> {
        self.post_ok(&format!("/api/matches/{match_id}/apply"), &json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(base_url: &str) -> RestClient {
        RestClient::new(&ClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn test_url_building() {
        let client = make_client("http://localhost:8000");
        assert_eq!(
            client.url("/api/chat/sessions"),
            "http://localhost:8000/api/chat/sessions"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = make_client("http://coach.internal:9000/");
        assert_eq!(client.base_url(), "http://coach.internal:9000");
        assert_eq!(
            client.url("/api/job-postings"),
            "http://coach.internal:9000/api/job-postings"
        );
    }
}
