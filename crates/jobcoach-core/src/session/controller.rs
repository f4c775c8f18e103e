//! Session controller: optimistic sends, reconciliation, profile refresh.
//!
//! All client-side chat state lives here: the ordered message list, the
//! derived candidate profile, the match cache, and the composer input
//! buffer. Every mutation goes through a [`CoachApi`] call. A single
//! in-flight flag gates concurrent sends; there is no locking because the
//! UI is single-threaded and event-driven.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use jobcoach_types::api::MessageExchange;
use jobcoach_types::chat::{ChatMessage, MessageId, MessageRole, SessionId};
use jobcoach_types::error::{ApiError, MatchError, SendError};
use jobcoach_types::matching::{JobMatch, MatchId};
use jobcoach_types::profile::CandidateProfile;

use crate::api::CoachApi;
use crate::session::cache::MatchCache;

/// Default number of matches requested per fetch.
const DEFAULT_MATCH_LIMIT: u32 = 20;

/// Metadata for the active session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMeta {
    pub id: SessionId,
    pub title: String,
    pub started_at: DateTime<Utc>,
}

/// Owns all client-side chat state and mediates mutations through the API.
///
/// Invariants:
/// - message ordering is insertion order;
/// - at most one message with a `Local` id exists, and only while a send is
///   in flight;
/// - the profile is wholly replaced on success, never partially mutated.
pub struct SessionController<A: CoachApi> {
    api: A,
    session: Option<SessionMeta>,
    messages: Vec<ChatMessage>,
    profile: Option<CandidateProfile>,
    matches: MatchCache,
    input: String,
    next_local_id: u64,
    in_flight: bool,
}

impl<A: CoachApi> SessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: None,
            messages: Vec::new(),
            profile: None,
            matches: MatchCache::Empty,
            input: String::new(),
            next_local_id: 1,
            in_flight: false,
        }
    }

    // --- Accessors ---

    pub fn session(&self) -> Option<&SessionMeta> {
        self.session.as_ref()
    }

    /// Messages in insertion order. System messages are never stored.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn matches(&self) -> &MatchCache {
        &self.matches
    }

    /// Whether a send is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Current composer input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the composer input buffer (e.g. a prefilled template).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // --- Session lifecycle ---

    /// Create a new remote session, resetting all local state first.
    ///
    /// On success the controller holds the session metadata, the initial
    /// visible messages (system prompt filtered out), and the returned
    /// profile; the match cache starts empty. On failure all state stays
    /// empty and the error propagates for a user-visible banner.
    ///
    /// A prior in-flight send is simply superseded: its result lands on a
    /// controller that no longer tracks the old session.
    pub async fn create_session(&mut self) -> Result<&SessionMeta, ApiError> {
        self.session = None;
        self.messages.clear();
        self.profile = None;
        self.matches = MatchCache::Empty;
        self.input.clear();
        self.in_flight = false;

        let snapshot = match self.api.create_session().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "session creation failed");
                return Err(e);
            }
        };

        info!(session_id = %snapshot.session_id, "session created");

        self.session = Some(SessionMeta {
            id: snapshot.session_id,
            title: snapshot.title,
            started_at: snapshot.created_at,
        });
        self.messages = snapshot
            .messages
            .into_iter()
            .filter(|m| m.role != MessageRole::System)
            .collect();
        self.profile = snapshot.profile;

        Ok(self.session.as_ref().unwrap_or_else(|| unreachable!()))
    }

    // --- Sending ---

    /// Send whatever is in the composer buffer.
    ///
    /// The buffer is cleared immediately (optimistic update); on failure it
    /// is restored so the user can resend without retyping.
    pub async fn send_input(&mut self) -> Result<&ChatMessage, SendError> {
        let content = self.input.clone();
        self.send(&content, false).await
    }

    /// Send a prepared prompt (e.g. a quick action).
    ///
    /// With `preserve_input` the composer buffer is left untouched, so a
    /// half-written message survives the action.
    pub async fn send_prompt(
        &mut self,
        prompt: &str,
        preserve_input: bool,
    ) -> Result<&ChatMessage, SendError> {
        self.send(prompt, preserve_input).await
    }

    /// Core send path. Returns the assistant's reply on success.
    async fn send(
        &mut self,
        content: &str,
        preserve_input: bool,
    ) -> Result<&ChatMessage, SendError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(SendError::Empty);
        }
        if self.in_flight {
            return Err(SendError::Busy);
        }
        let session_id = self.session.as_ref().ok_or(SendError::NoSession)?.id;

        // Optimistic insert: the message appears before the server confirms.
        let local_id = self.next_local_id;
        self.next_local_id += 1;
        self.messages.push(ChatMessage::local_user(local_id, trimmed));

        let prior_input = if preserve_input {
            None
        } else {
            Some(std::mem::take(&mut self.input))
        };

        self.in_flight = true;
        let result = self.api.send_message(session_id, trimmed).await;
        self.in_flight = false;

        match result {
            Ok(exchange) => {
                self.reconcile(local_id, exchange);
                // The reply is always the last message after reconciliation.
                Ok(self.messages.last().unwrap_or_else(|| unreachable!()))
            }
            Err(e) => {
                // Roll back: drop the optimistic entry, restore the input.
                self.messages
                    .retain(|m| m.id != MessageId::Local(local_id));
                if let Some(prior) = prior_input {
                    self.input = prior;
                }
                warn!(error = %e, "message send failed, optimistic entry rolled back");
                Err(SendError::Api(e))
            }
        }
    }

    /// Replace the optimistic message with the server-confirmed one, append
    /// the assistant reply, adopt the new profile, and mark matches stale.
    fn reconcile(&mut self, local_id: u64, exchange: MessageExchange) {
        let target = MessageId::Local(local_id);
        if let Some(slot) = self.messages.iter_mut().find(|m| m.id == target) {
            *slot = exchange.user_message;
        } else {
            // Superseded by a session reset mid-flight; nothing to update.
            warn!("optimistic message vanished before reconciliation");
            return;
        }
        self.messages.push(exchange.assistant_message);
        self.profile = exchange.profile;
        self.matches.invalidate();
    }

    // --- Matches ---

    /// Load matches for the session, serving the cache when it is fresh.
    ///
    /// `refresh` bypasses both the local cache and the server-side one
    /// (scores are recomputed). Failure leaves chat state and the cached
    /// list untouched.
    pub async fn load_matches(&mut self, refresh: bool) -> Result<&[JobMatch], MatchError> {
        let session_id = self.session.as_ref().ok_or(MatchError::NoSession)?.id;

        if !refresh && self.matches.is_fresh() {
            return Ok(self.matches.matches());
        }

        let page = self
            .api
            .fetch_matches(session_id, refresh, DEFAULT_MATCH_LIMIT)
            .await?;
        info!(total = page.total, refresh, "matches loaded");
        self.matches = MatchCache::Fresh(page.matches);
        Ok(self.matches.matches())
    }

    /// Toggle a bookmark and mirror the new state into the cached match.
    pub async fn toggle_bookmark(&mut self, match_id: MatchId) -> Result<bool, ApiError> {
        let bookmarked = self.api.toggle_bookmark(match_id).await?;
        self.update_cached_match(match_id, |m| m.is_bookmarked = bookmarked);
        Ok(bookmarked)
    }

    /// Apply to the job behind a match and mirror the flag into the cache.
    pub async fn apply_to_match(&mut self, match_id: MatchId) -> Result<(), ApiError> {
        self.api.apply_to_match(match_id).await?;
        self.update_cached_match(match_id, |m| m.is_applied = true);
        Ok(())
    }

    fn update_cached_match(&mut self, match_id: MatchId, update: impl FnOnce(&mut JobMatch)) {
        let list = match &mut self.matches {
            MatchCache::Empty => return,
            MatchCache::Fresh(m) | MatchCache::Stale(m) => m,
        };
        if let Some(entry) = list.iter_mut().find(|m| m.match_id == match_id) {
            update(entry);
        }
    }

    /// Access the underlying API client (for operations outside chat state,
    /// e.g. the job browser).
    pub fn api(&self) -> &A {
        &self.api
    }
}
