use thiserror::Error;

/// Errors from calls to the remote matching API.
///
/// Two failure classes exist: transport/network failures and non-2xx
/// responses. No structured error codes are parsed beyond the status class;
/// the UI collapses both to a generic error banner.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("entity not found")]
    NotFound,

    #[error("invalid response: {0}")]
    Decode(String),
}

/// Errors from attempting to send a chat message.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message is empty")]
    Empty,

    #[error("another request is already in flight")]
    Busy,

    #[error("no active session")]
    NoSession,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors from loading job matches.
///
/// Kept separate from [`SendError`]: a match-loading failure never affects
/// chat state and is surfaced in its own banner.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no active session")]
    NoSession,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 500: internal error");
    }

    #[test]
    fn test_send_error_wraps_api_error() {
        let err = SendError::from(ApiError::Transport("connection refused".to_string()));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_empty_error_display() {
        assert_eq!(SendError::Empty.to_string(), "message is empty");
    }
}
