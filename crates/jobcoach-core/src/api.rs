//! CoachApi trait definition.
//!
//! This is the abstraction over the remote job-matching API. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); the concrete reqwest
//! implementation lives in jobcoach-client so this crate stays free of
//! HTTP dependencies.

use jobcoach_types::api::{JobPage, MatchPage, MessageExchange, SessionSnapshot};
use jobcoach_types::chat::{ChatMessage, SessionId};
use jobcoach_types::error::ApiError;
use jobcoach_types::job::JobQuery;
use jobcoach_types::matching::MatchId;
use jobcoach_types::profile::CandidateProfile;
use jobcoach_types::resume::{BasicInfo, CoverLetter, Project, ResumeId, WorkExperience};

/// Client for the remote matching API.
///
/// Every call is a single-attempt request/response pair: no retries, no
/// backoff. Failures map to [`ApiError`] and degrade to a user-visible
/// banner in the UI.
pub trait CoachApi: Send + Sync {
    /// Create a new chat session. Returns the initial messages (including
    /// the system prompt) and any existing profile.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<SessionSnapshot, ApiError>> + Send;

    /// Post a user message and receive the persisted user message, the
    /// assistant's reply, and the regenerated profile.
    fn send_message(
        &self,
        session_id: SessionId,
        content: &str,
    ) -> impl std::future::Future<Output = Result<MessageExchange, ApiError>> + Send;

    /// Fetch the full message history for a session.
    fn fetch_messages(
        &self,
        session_id: SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, ApiError>> + Send;

    /// Fetch the current candidate profile for a session, if one exists.
    fn fetch_profile(
        &self,
        session_id: SessionId,
    ) -> impl std::future::Future<Output = Result<Option<CandidateProfile>, ApiError>> + Send;

    /// Fetch job matches for a session. With `refresh` the server recomputes
    /// scores instead of serving cached rows.
    fn fetch_matches(
        &self,
        session_id: SessionId,
        refresh: bool,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<MatchPage, ApiError>> + Send;

    /// List active job postings matching the query filters.
    fn list_jobs(
        &self,
        query: &JobQuery,
    ) -> impl std::future::Future<Output = Result<JobPage, ApiError>> + Send;

    // --- Resume flow ---

    /// Create an empty resume shell and return its id.
    fn create_resume(
        &self,
    ) -> impl std::future::Future<Output = Result<ResumeId, ApiError>> + Send;

    /// Save the applicant's basic contact info.
    fn save_basic_info(
        &self,
        resume_id: ResumeId,
        info: &BasicInfo,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Save the cover letter sections.
    fn save_cover_letter(
        &self,
        resume_id: ResumeId,
        letter: &CoverLetter,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Append a work experience entry.
    fn add_experience(
        &self,
        resume_id: ResumeId,
        experience: &WorkExperience,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Append a portfolio project entry.
    fn add_project(
        &self,
        resume_id: ResumeId,
        project: &Project,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Submit the resume for matching.
    fn submit_resume(
        &self,
        resume_id: ResumeId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    // --- Match actions ---

    /// Toggle the bookmark flag on a match. Returns the new state.
    fn toggle_bookmark(
        &self,
        match_id: MatchId,
    ) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;

    /// Apply to the job behind a match.
    fn apply_to_match(
        &self,
        match_id: MatchId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;
}
