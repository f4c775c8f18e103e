//! Chat session and message types for jobcoach.
//!
//! Messages exist in two identity states: locally created (optimistic,
//! awaiting server acknowledgment) and server-persisted. A logical message
//! carries exactly one of the two -- reconciliation replaces the whole
//! message rather than merging identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Server-assigned chat session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            "system" => Ok(MessageRole::System),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// Identity of a chat message.
///
/// `Local` ids are assigned by the client when a message is displayed
/// optimistically, before the server has acknowledged it. `Remote` ids are
/// assigned by the server. The two are never both present for the same
/// logical message: a successful send replaces the `Local` message with the
/// server-confirmed `Remote` one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageId {
    /// Client-assigned optimistic id (monotonic counter, per controller).
    Local(u64),
    /// Server-assigned persisted id.
    Remote(i64),
}

impl MessageId {
    /// Whether this message is still awaiting server acknowledgment.
    pub fn is_local(&self) -> bool {
        matches!(self, MessageId::Local(_))
    }

    /// Whether this message has been persisted by the server.
    pub fn is_remote(&self) -> bool {
        matches!(self, MessageId::Remote(_))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Local(n) => write!(f, "local:{n}"),
            MessageId::Remote(n) => write!(f, "{n}"),
        }
    }
}

/// A single message within a chat session.
///
/// Messages are kept in insertion order by the session controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a local (optimistic) user message.
    pub fn local_user(local_id: u64, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::Local(local_id),
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant, MessageRole::System] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, MessageRole::User);
    }

    #[test]
    fn test_message_id_states_are_exclusive() {
        let local = MessageId::Local(3);
        let remote = MessageId::Remote(42);
        assert!(local.is_local() && !local.is_remote());
        assert!(remote.is_remote() && !remote.is_local());
    }

    #[test]
    fn test_local_user_message() {
        let msg = ChatMessage::local_user(7, "  hello  ");
        assert_eq!(msg.id, MessageId::Local(7));
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "  hello  ");
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(99).to_string(), "99");
    }
}
